//! `init` and `config` commands

use super::CliContext;
use crate::error::{GigForgeError, GigForgeResult};
use crate::render::promo::TITLE_SIZE;
use crate::render::FontFace;
use crate::templates::{builtin_template, builtin_template_names};

/// Handle `init`: write settings and copy the built-in templates
///
/// Existing files are left alone so customised templates survive a re-run.
pub fn handle_init_command(ctx: &CliContext) -> GigForgeResult<()> {
    let paths = &ctx.paths;
    println!("Initializing GigForge at: {}", paths.base_dir().display());

    paths.ensure_directories()?;
    if paths.is_initialized() {
        println!("  Settings already exist: {}", paths.settings_file().display());
    } else {
        ctx.settings.save(paths)?;
        println!("  Wrote {}", paths.settings_file().display());
    }

    for name in builtin_template_names() {
        let target = paths.templates_dir().join(name);
        if target.exists() {
            println!("  Keeping existing template {}", target.display());
            continue;
        }
        let source = builtin_template(name).unwrap_or_default();
        std::fs::write(&target, source).map_err(|e| {
            GigForgeError::Io(format!("Failed to write {}: {}", target.display(), e))
        })?;
        println!("  Wrote template {}", target.display());
    }

    println!();
    println!("Edit the templates in {} to customise proposals.", paths.templates_dir().display());
    println!(
        "Drop DejaVuSans-Bold.ttf and DejaVuSans.ttf into {} to set promo fonts.",
        paths.fonts_dir().display()
    );
    Ok(())
}

/// Handle `config`: print paths and effective settings
pub fn handle_config_command(ctx: &CliContext) -> GigForgeResult<()> {
    let paths = &ctx.paths;
    let settings = &ctx.settings;
    let style = settings.promo_style(paths);
    let title_face = style.fonts.bold_face(TITLE_SIZE);

    println!("GigForge Configuration");
    println!("======================");
    println!("Base directory:      {}", paths.base_dir().display());
    println!("Settings file:       {}", paths.settings_file().display());
    println!("History log:         {}", paths.history_log().display());
    println!("Templates directory: {}", paths.templates_dir().display());
    println!("Fonts directory:     {}", paths.fonts_dir().display());
    println!("Initialized:         {}", if paths.is_initialized() { "Yes" } else { "No" });
    println!();
    println!("Settings:");
    println!("  Brand:          {}", settings.brand_name);
    println!("  Default author: {}", settings.default_author);
    println!("  Default margin: {}", settings.default_margin);
    println!("  Currency:       {}", settings.currency_symbol);
    println!("  Date format:    {}", settings.date_format);
    println!(
        "  Promo canvas:   {}x{} on rgb({}, {}, {})",
        style.width, style.height, style.background[0], style.background[1], style.background[2]
    );
    println!(
        "  Promo font:     {}",
        match &title_face {
            FontFace::Preferred(face) => face.source().display().to_string(),
            FontFace::Default(_) => "built-in bitmap".to_string(),
        }
    );
    Ok(())
}
