/// Attribute folded into `:class` unless configured otherwise.
pub const DEFAULT_ATTR_NAME: &str = "cls";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Shorthand attribute name, e.g. `cls` for `cls="a b"` and `:cls="expr"`.
    pub attr_name: String,
    /// Style-module identifier. When unset it is taken from the component's
    /// `<style module>` block, falling back to `$style`.
    pub module_name: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            attr_name: DEFAULT_ATTR_NAME.to_string(),
            module_name: None,
        }
    }
}

impl TransformOptions {
    pub fn with_attr_name(mut self, name: impl Into<String>) -> Self {
        self.attr_name = name.into();
        self
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }
}
