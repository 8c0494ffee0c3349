//! Promo image command

use std::path::PathBuf;

use clap::Args;
use image::Rgb;

use super::output::{deliver, Destination};
use super::CliContext;
use crate::error::{GigForgeError, GigForgeResult};
use crate::render::promo::check_canvas;
use crate::render::render_promo;

/// Arguments for `promo`
#[derive(Args, Debug, Clone)]
pub struct PromoArgs {
    /// Headline text
    #[arg(short, long)]
    pub title: String,

    /// Text under the headline
    #[arg(short, long, default_value = "")]
    pub subtitle: String,

    /// Output PNG path
    #[arg(short, long, default_value = "promo.png")]
    pub out: PathBuf,

    /// Background colour as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    pub background: Option<Rgb<u8>>,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,
}

/// Parse "R,G,B" with components 0-255
pub fn parse_rgb(value: &str) -> GigForgeResult<Rgb<u8>> {
    let invalid = || GigForgeError::Validation(format!("Invalid colour '{}'. Use R,G,B", value));

    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<GigForgeResult<Vec<u8>>>()?;

    match parts.as_slice() {
        [r, g, b] => Ok(Rgb([*r, *g, *b])),
        _ => Err(invalid()),
    }
}

/// Parse "WIDTHxHEIGHT" within the promo canvas limits
pub fn parse_size(value: &str) -> GigForgeResult<(u32, u32)> {
    let invalid = || GigForgeError::Validation(format!("Invalid size '{}'. Use WIDTHxHEIGHT", value));

    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(invalid());
    }
    check_canvas(width, height)?;
    Ok((width, height))
}

/// Handle `promo`: render and write the PNG
pub fn handle_promo_command(ctx: &CliContext, args: PromoArgs) -> GigForgeResult<()> {
    let mut style = ctx.settings.promo_style(&ctx.paths);
    if let Some(background) = args.background {
        style.background = background;
    }
    if let Some((width, height)) = args.size {
        style.width = width;
        style.height = height;
    }

    let doc = render_promo(&args.title, &args.subtitle, &style)?;
    deliver(ctx, &doc, Destination::File(&args.out), &args.title, None)?;

    println!("Wrote promo image to {}", args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("6,4,10").unwrap(), Rgb([6, 4, 10]));
        assert_eq!(parse_rgb(" 255, 0 ,128 ").unwrap(), Rgb([255, 0, 128]));
        for bad in ["", "1,2", "1,2,3,4", "256,0,0", "a,b,c"] {
            assert!(parse_rgb(bad).unwrap_err().is_validation(), "{}", bad);
        }
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1200x630").unwrap(), (1200, 630));
        assert_eq!(parse_size("800X600").unwrap(), (800, 600));
        for bad in ["", "1200", "0x630", "1200x", "axb", "4294967295x4294967295", "100000x100000"] {
            assert!(parse_size(bad).unwrap_err().is_validation(), "{}", bad);
        }
    }
}
