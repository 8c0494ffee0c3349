//! Text templates
//!
//! A [`TemplateEnvironment`] is built once at process start and shared
//! read-only by every render call. Templates are looked up in the user's
//! templates directory first and fall back to the copies compiled into the
//! binary, so `gigforge` works before `gigforge init` has ever run.

use std::io;
use std::path::{Component, Path, PathBuf};

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;

use crate::error::GigForgeResult;

/// Name of the proposal template
pub const PROPOSAL_TEMPLATE: &str = "proposal.md.j2";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    PROPOSAL_TEMPLATE,
    include_str!("../../templates/proposal.md.j2"),
)];

/// Source of a template compiled into the binary
pub fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
}

/// Names of all built-in templates
pub fn builtin_template_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
}

/// Immutable template environment
#[derive(Debug)]
pub struct TemplateEnvironment {
    env: Environment<'static>,
    override_dir: Option<PathBuf>,
}

impl TemplateEnvironment {
    /// Environment with only the built-in templates
    pub fn builtin() -> Self {
        Self::build(None)
    }

    /// Environment that prefers templates found in `dir`
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self::build(Some(dir.into()))
    }

    fn build(override_dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let loader_dir = override_dir.clone();
        env.set_loader(move |name| load_template(loader_dir.as_deref(), name));

        Self { env, override_dir }
    }

    /// Directory searched before the built-ins, if any
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Whether `name` resolves to a template
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Render template `name` with `ctx`
    ///
    /// Fails if the template is missing, does not parse, or references a
    /// variable the context does not provide.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> GigForgeResult<String> {
        let template = self.env.get_template(name)?;
        let rendered = template.render(ctx)?;
        tracing::debug!(template = name, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

impl Default for TemplateEnvironment {
    fn default() -> Self {
        Self::builtin()
    }
}

fn load_template(dir: Option<&Path>, name: &str) -> Result<Option<String>, minijinja::Error> {
    if let Some(dir) = dir.filter(|_| is_plain_relative(name)) {
        let path = dir.join(name);
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                tracing::debug!(path = %path.display(), "loaded template override");
                return Ok(Some(source));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    format!("could not read template {}", path.display()),
                )
                .with_source(e));
            }
        }
    }

    Ok(builtin_template(name).map(str::to_string))
}

/// Template names must stay inside the templates directory
fn is_plain_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
