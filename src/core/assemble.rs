//! Document assembly
//!
//! Writes one section per module: a `[org.package(.module)]` header, the
//! required entries, the commented-out optional entries, then a blank line.

use super::composite::render_variable;
use super::group::partition;
use crate::config::{GeneratorSection, OptionalStyle};
use crate::domain::{ModuleGroup, Result};
use crate::log_module_rendered;

const OPTIONAL_MARKER: &str = " (optional)";

/// Runtime options for [`ConfigTomlGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Comment style for optional entries
    pub optional_style: OptionalStyle,
    /// Emit optional entries at all
    pub include_optional: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            optional_style: OptionalStyle::Inherited,
            include_optional: true,
        }
    }
}

impl From<&GeneratorSection> for GeneratorOptions {
    fn from(section: &GeneratorSection) -> Self {
        Self {
            optional_style: section.optional_style,
            include_optional: section.include_optional,
        }
    }
}

/// Generates example Config.toml documents
///
/// # Examples
///
/// ```
/// use cfgtemplate::core::{ConfigTomlGenerator, GeneratorOptions};
/// use cfgtemplate::domain::{ConfigVariable, ModuleGroup, ModuleKey, SimpleKind};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let groups = vec![ModuleGroup::new(ModuleKey::new("myorg", "pkg")?)
///     .with_variable(ConfigVariable::required("port", SimpleKind::Int))];
///
/// let generator = ConfigTomlGenerator::new(GeneratorOptions::default());
/// let toml = generator.generate(&groups)?;
/// assert_eq!(toml, "[myorg.pkg]\nport = 12 # type: int\n\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigTomlGenerator {
    options: GeneratorOptions,
}

impl ConfigTomlGenerator {
    /// Creates a generator with the given options
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the generator's options
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Renders the whole document for `groups`, in the given module order
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::TemplateError::UnsupportedTypeKind`] if any
    /// variable in any module has an unrecognised type. No partial document
    /// is returned in that case.
    pub fn generate(&self, groups: &[ModuleGroup]) -> Result<String> {
        let mut document = String::new();
        for group in groups {
            self.render_module(group, &mut document)?;
        }
        tracing::debug!(
            modules = groups.len(),
            bytes = document.len(),
            "Config template generated"
        );
        Ok(document)
    }

    fn render_module(&self, group: &ModuleGroup, out: &mut String) -> Result<()> {
        let parts = partition(group);
        out.push('[');
        out.push_str(&parts.key.canonical());
        out.push_str("]\n");

        for variable in &parts.required {
            out.push_str(&render_variable(parts.key, variable)?);
        }

        let mut optional_written = 0;
        if self.options.include_optional {
            for variable in &parts.optional {
                let fragment = render_variable(parts.key, variable)?;
                if fragment.is_empty() {
                    continue;
                }
                out.push_str(&wrap_optional(&fragment, self.options.optional_style));
                optional_written += 1;
            }
        }
        out.push('\n');

        log_module_rendered!(parts.key, parts.required.len(), optional_written);
        Ok(())
    }
}

/// Generates a document with default options
///
/// # Errors
///
/// See [`ConfigTomlGenerator::generate`].
pub fn generate_config_toml(groups: &[ModuleGroup]) -> Result<String> {
    ConfigTomlGenerator::default().generate(groups)
}

/// Comments out an optional entry's fragment
pub fn wrap_optional(fragment: &str, style: OptionalStyle) -> String {
    match style {
        OptionalStyle::Inherited => format!("# {fragment}{OPTIONAL_MARKER}\n"),
        OptionalStyle::CommentEachLine => {
            let mut out = String::with_capacity(fragment.len() + 16);
            for (i, line) in fragment.lines().enumerate() {
                out.push_str("# ");
                out.push_str(line);
                if i == 0 {
                    out.push_str(OPTIONAL_MARKER);
                }
                out.push('\n');
            }
            out
        }
    }
}
