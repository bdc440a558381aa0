//! Template module - React Native component template
//!
//! Renders a single fixed component file. The name is interpolated verbatim:
//! no escaping, so a name containing quotes, braces or newlines produces
//! output that is not valid JavaScript.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::keys;
use super::params::ComponentParams;

/// Generated source for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    pub component: String,
}

impl GeneratedComponent {
    /// Output record keyed by `component`
    pub fn into_record(self) -> BTreeMap<String, String> {
        BTreeMap::from([(keys::COMPONENT.to_string(), self.component)])
    }
}

/// Render the component template for `name`
pub fn render(name: &str) -> String {
    format!(
        concat!(
            "import React from 'react';\n",
            "import {{ View, Text }} from 'react-native';\n",
            "\n",
            "const {name} = () => (\n",
            "  <View>\n",
            "    <Text>{name} works!</Text>\n",
            "  </View>\n",
            ");\n",
            "\n",
            "export default {name};\n",
        ),
        name = name
    )
}

/// Generate a component from params, falling back to the default name
pub fn generate_component(params: &ComponentParams) -> GeneratedComponent {
    GeneratedComponent {
        component: render(params.resolved_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::FallbackPolicy;

    const GREETING: &str = "import React from 'react';\nimport { View, Text } from 'react-native';\n\nconst Greeting = () => (\n  <View>\n    <Text>Greeting works!</Text>\n  </View>\n);\n\nexport default Greeting;\n";

    #[test]
    fn renders_greeting_exactly() {
        assert_eq!(render("Greeting"), GREETING);
    }

    #[test]
    fn default_params_render_my_component() {
        let generated = generate_component(&ComponentParams::new());
        assert_eq!(generated.component, render("MyComponent"));
        assert!(generated.component.contains("const MyComponent = () => ("));
        assert!(generated.component.ends_with("export default MyComponent;\n"));
    }

    #[test]
    fn empty_name_matches_missing_name() {
        let empty = generate_component(&ComponentParams::new().with_name(""));
        let missing = generate_component(&ComponentParams::new());
        assert_eq!(empty, missing);
    }

    #[test]
    fn empty_name_under_missing_only_is_substituted() {
        let params = ComponentParams::new()
            .with_name("")
            .with_fallback(FallbackPolicy::MissingOnly);
        let generated = generate_component(&params);
        assert!(generated.component.contains("const  = () => ("));
        assert!(generated.component.contains("<Text> works!</Text>"));
        assert!(generated.component.ends_with("export default ;\n"));
    }

    #[test]
    fn name_is_not_escaped() {
        let out = render("Bad'}<x>");
        assert!(out.contains("const Bad'}<x> = () => ("));
    }

    #[test]
    fn into_record_has_single_component_key() {
        let params = ComponentParams::new().with_name("Greeting");
        let record = generate_component(&params).into_record();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("component").map(String::as_str), Some(GREETING));
    }
}
