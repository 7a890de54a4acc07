//! Mobile stack generators: React Native (Expo) and Flutter.

use std::fmt::Write as _;

use stackforge_core::{
    application::ports::StackGenerator,
    domain::{FeatureFlag, FilePlan, GenerationContext},
};

pub struct ReactNative;

impl StackGenerator for ReactNative {
    fn stack_id(&self) -> &'static str {
        "react-native"
    }

    fn compose(&self, ctx: &GenerationContext) -> FilePlan {
        let mut manifest = String::new();
        let _ = writeln!(manifest, "{{");
        let _ = writeln!(manifest, "  \"name\": \"{}\",", ctx.project_name());
        let _ = writeln!(manifest, "  \"version\": \"0.1.0\",");
        let _ = writeln!(manifest, "  \"main\": \"expo/AppEntry.js\",");
        let _ = writeln!(manifest, "  \"scripts\": {{");
        let _ = writeln!(manifest, "    \"start\": \"expo start\",");
        let _ = writeln!(manifest, "    \"android\": \"expo start --android\",");
        if ctx.flags().contains(FeatureFlag::Testing) {
            let _ = writeln!(manifest, "    \"ios\": \"expo start --ios\",");
            let _ = writeln!(manifest, "    \"test\": \"jest\"");
        } else {
            let _ = writeln!(manifest, "    \"ios\": \"expo start --ios\"");
        }
        let _ = writeln!(manifest, "  }},");
        let _ = writeln!(manifest, "  \"dependencies\": {{");
        let _ = writeln!(manifest, "    \"expo\": \"~52.0.0\",");
        let _ = writeln!(manifest, "    \"react\": \"18.3.1\",");
        let _ = writeln!(manifest, "    \"react-native\": \"0.76.0\"");
        let _ = writeln!(manifest, "  }},");
        let _ = writeln!(manifest, "  \"devDependencies\": {{");
        if ctx.flags().contains(FeatureFlag::Testing) {
            let _ = writeln!(manifest, "    \"@babel/core\": \"^7.25.0\",");
            let _ = writeln!(manifest, "    \"jest\": \"^29.7.0\",");
            let _ = writeln!(manifest, "    \"jest-expo\": \"~52.0.0\"");
        } else {
            let _ = writeln!(manifest, "    \"@babel/core\": \"^7.25.0\"");
        }
        let _ = writeln!(manifest, "  }}");
        let _ = writeln!(manifest, "}}");

        let app_json = format!(
            r#"{{
  "expo": {{
    "name": "{name}",
    "slug": "{name}",
    "version": "0.1.0",
    "orientation": "portrait",
    "platforms": ["ios", "android"]
  }}
}}
"#,
            name = ctx.project_name()
        );

        FilePlan::new()
            .with("package.json", manifest)
            .with("app.json", app_json)
            .with("App.tsx", RN_APP)
            .with("tsconfig.json", RN_TSCONFIG)
            .with(".gitignore", RN_IGNORE)
    }
}

const RN_APP: &str = r#"import { StatusBar } from 'expo-status-bar';
import { StyleSheet, Text, View } from 'react-native';

export default function App() {
  return (
    <View style={styles.container}>
      <Text>Ready to build.</Text>
      <StatusBar style="auto" />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    alignItems: 'center',
    justifyContent: 'center',
  },
});
"#;

const RN_TSCONFIG: &str = r#"{
  "extends": "expo/tsconfig.base",
  "compilerOptions": {
    "strict": true
  }
}
"#;

const RN_IGNORE: &str = "\
node_modules/
.expo/
dist/
.env
*.log
";

pub struct FlutterApp;

impl StackGenerator for FlutterApp {
    fn stack_id(&self) -> &'static str {
        "flutter-app"
    }

    fn compose(&self, ctx: &GenerationContext) -> FilePlan {
        let name = pub_name(ctx.project_name());
        let mut pubspec = format!(
            r#"name: {name}
description: A new Flutter application.
version: 0.1.0
publish_to: "none"

environment:
  sdk: ^3.5.0

dependencies:
  flutter:
    sdk: flutter
  cupertino_icons: ^1.0.8
"#
        );
        let _ = writeln!(pubspec);
        let _ = writeln!(pubspec, "dev_dependencies:");
        let _ = writeln!(pubspec, "  flutter_test:");
        let _ = writeln!(pubspec, "    sdk: flutter");
        if ctx.flags().contains(FeatureFlag::Linting) {
            let _ = writeln!(pubspec, "  flutter_lints: ^5.0.0");
        }
        let _ = writeln!(pubspec);
        let _ = writeln!(pubspec, "flutter:");
        let _ = writeln!(pubspec, "  uses-material-design: true");

        let mut plan = FilePlan::new()
            .with("pubspec.yaml", pubspec)
            .with("lib/main.dart", FLUTTER_MAIN)
            .with(".gitignore", FLUTTER_IGNORE);
        if ctx.flags().contains(FeatureFlag::Linting) {
            plan.push("analysis_options.yaml", FLUTTER_ANALYSIS);
        }
        if ctx.flags().contains(FeatureFlag::Testing) {
            plan.push("test/widget_test.dart", FLUTTER_TEST);
        }
        plan
    }
}

/// Dart package names are lower_snake_case.
fn pub_name(project_name: &str) -> String {
    project_name.to_ascii_lowercase().replace('-', "_")
}

const FLUTTER_MAIN: &str = r#"import 'package:flutter/material.dart';

void main() {
  runApp(const App());
}

class App extends StatelessWidget {
  const App({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'App',
      theme: ThemeData(useMaterial3: true),
      home: const Scaffold(
        body: Center(child: Text('Ready to build.')),
      ),
    );
  }
}
"#;

const FLUTTER_ANALYSIS: &str = r#"include: package:flutter_lints/flutter.yaml
"#;

const FLUTTER_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';

void main() {
  test('placeholder', () {
    expect(1 + 1, 2);
  });
}
"#;

const FLUTTER_IGNORE: &str = "\
.dart_tool/
build/
.flutter-plugins
.env
";

#[cfg(test)]
mod tests {
    use super::*;
    use stackforge_core::domain::{FeatureFlagSet, StackCatalog};

    fn ctx(stack_id: &str, name: &str, flags: FeatureFlagSet) -> GenerationContext {
        let descriptor = StackCatalog::builtin()
            .lookup(stack_id)
            .expect("known stack")
            .clone();
        GenerationContext::new("/tmp/app", descriptor, flags, name)
    }

    fn content_of<'a>(plan: &'a FilePlan, path: &str) -> &'a str {
        plan.iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.content.as_str())
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn react_native_emits_expo_layout() {
        let plan = ReactNative.compose(&ctx("react-native", "app", FeatureFlagSet::none()));
        assert!(content_of(&plan, "package.json").contains("\"expo\""));
        assert!(content_of(&plan, "app.json").contains("\"slug\": \"app\""));
        assert!(content_of(&plan, "App.tsx").contains("expo-status-bar"));
    }

    #[test]
    fn react_native_testing_flag_adds_jest() {
        let plan = ReactNative.compose(&ctx(
            "react-native",
            "app",
            FeatureFlagSet::from_keys(["testing"]),
        ));
        let manifest = content_of(&plan, "package.json");
        assert!(manifest.contains("jest-expo"));
        assert!(manifest.contains("\"test\": \"jest\""));
    }

    #[test]
    fn flutter_pub_name_is_snake_case() {
        let plan = FlutterApp.compose(&ctx("flutter-app", "My-App", FeatureFlagSet::none()));
        assert!(content_of(&plan, "pubspec.yaml").starts_with("name: my_app"));
    }

    #[test]
    fn flutter_linting_flag_adds_analysis_options() {
        let without = FlutterApp.compose(&ctx("flutter-app", "app", FeatureFlagSet::none()));
        let with = FlutterApp.compose(&ctx(
            "flutter-app",
            "app",
            FeatureFlagSet::from_keys(["linting"]),
        ));
        assert!(!without.iter().any(|e| e.path.as_str() == "analysis_options.yaml"));
        assert!(with.iter().any(|e| e.path.as_str() == "analysis_options.yaml"));
        assert!(content_of(&with, "pubspec.yaml").contains("flutter_lints"));
    }
}
