//! Font faces for raster output
//!
//! A [`FontFace`] is resolved once per render call: the first candidate
//! TrueType file that loads becomes the preferred face, otherwise the
//! built-in bitmap face is used. Resolution never fails.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

use super::bitmap_font::BitmapFace;

/// File name of the preferred bold face
pub const BOLD_FONT_FILE: &str = "DejaVuSans-Bold.ttf";

/// File name of the preferred regular face
pub const REGULAR_FONT_FILE: &str = "DejaVuSans.ttf";

/// Directories where distributions install DejaVu
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

/// A TrueType face loaded at a fixed pixel size
pub struct TrueTypeFace {
    font: Font<'static>,
    scale: Scale,
    ascent: f32,
    source: PathBuf,
}

impl TrueTypeFace {
    /// Load `path` so that `size` is the em size in pixels
    pub fn load(path: &Path, size: f32) -> Option<Self> {
        let data = std::fs::read(path).ok()?;
        let font = Font::try_from_vec(data)?;

        let unscaled = font.v_metrics_unscaled();
        let units_per_em = font.units_per_em().max(1) as f32;
        let scale = Scale::uniform(size * (unscaled.ascent - unscaled.descent) / units_per_em);
        let ascent = font.v_metrics(scale).ascent;

        Some(Self {
            font,
            scale,
            ascent,
            source: path.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn text_width(&self, text: &str) -> u32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil()
            .max(0.0) as u32
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let origin = point(x as f32, y as f32 + self.ascent);
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);

        for glyph in self.font.layout(text, self.scale, origin) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bounds.min.x + gx as i32;
                let py = bounds.min.y + gy as i32;
                if px >= 0 && py >= 0 && px < width && py < height {
                    let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                    *pixel = blend_pixel(*pixel, color, coverage);
                }
            });
        }
    }
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("source", &self.source)
            .field("scale", &self.scale.y)
            .finish()
    }
}

/// A face ready to draw text
#[derive(Debug)]
pub enum FontFace {
    Preferred(TrueTypeFace),
    Default(BitmapFace),
}

impl FontFace {
    /// First loadable candidate, or the bitmap face
    pub fn resolve(candidates: &[PathBuf], size: f32) -> Self {
        for path in candidates {
            if let Some(face) = TrueTypeFace::load(path, size) {
                tracing::debug!(font = %path.display(), size, "loaded font face");
                return FontFace::Preferred(face);
            }
        }
        tracing::debug!(size, candidates = candidates.len(), "using built-in bitmap face");
        FontFace::Default(BitmapFace::for_size(size))
    }

    pub fn is_preferred(&self) -> bool {
        matches!(self, FontFace::Preferred(_))
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            FontFace::Preferred(face) => face.text_width(text),
            FontFace::Default(face) => face.text_width(text),
        }
    }

    /// Draw `text` with the top of its em box at `y`
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            FontFace::Preferred(face) => face.draw(canvas, x, y, text, color),
            FontFace::Default(face) => face.draw(canvas, x, y, text, color),
        }
    }
}

/// Candidate font files for the title and body faces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSources {
    pub bold: Vec<PathBuf>,
    pub regular: Vec<PathBuf>,
}

impl FontSources {
    /// DejaVu in the usual system locations
    pub fn system() -> Self {
        Self::none().with_dirs(SYSTEM_FONT_DIRS.iter().map(Path::new))
    }

    /// No candidates; always resolves to the bitmap face
    pub fn none() -> Self {
        Self::default()
    }

    /// Try DejaVu in `dir` before the current candidates
    pub fn with_dir(self, dir: &Path) -> Self {
        self.with_preferred(Some(dir.join(BOLD_FONT_FILE)), Some(dir.join(REGULAR_FONT_FILE)))
    }

    /// Try explicit font files before the current candidates
    pub fn with_preferred(mut self, bold: Option<PathBuf>, regular: Option<PathBuf>) -> Self {
        if let Some(path) = bold {
            self.bold.insert(0, path);
        }
        if let Some(path) = regular {
            self.regular.insert(0, path);
        }
        self
    }

    fn with_dirs<'a>(mut self, dirs: impl Iterator<Item = &'a Path>) -> Self {
        for dir in dirs {
            self.bold.push(dir.join(BOLD_FONT_FILE));
            self.regular.push(dir.join(REGULAR_FONT_FILE));
        }
        self
    }

    pub fn bold_face(&self, size: f32) -> FontFace {
        FontFace::resolve(&self.bold, size)
    }

    pub fn regular_face(&self, size: f32) -> FontFace {
        FontFace::resolve(&self.regular, size)
    }
}

/// Mix `color` over `background` by `coverage` in 0..=1
pub fn blend_pixel(background: Rgb<u8>, color: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let coverage = coverage.clamp(0.0, 1.0);
    let mut out = background;
    for i in 0..3 {
        out[i] = (color[i] as f32 * coverage + background[i] as f32 * (1.0 - coverage)).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_candidates_resolves_to_bitmap() {
        let face = FontSources::none().bold_face(72.0);
        assert!(!face.is_preferred());
        assert_eq!(face.text_width("AB"), 11 * 7);
    }

    #[test]
    fn test_unreadable_candidates_fall_back() {
        let temp_dir = TempDir::new().unwrap();
        let garbage = temp_dir.path().join(BOLD_FONT_FILE);
        std::fs::write(&garbage, b"not a font").unwrap();

        let candidates = vec![temp_dir.path().join("missing.ttf"), garbage];
        assert!(!FontFace::resolve(&candidates, 36.0).is_preferred());
    }

    #[test]
    fn test_candidate_order() {
        let sources = FontSources::none()
            .with_dir(Path::new("/fonts"))
            .with_preferred(Some(PathBuf::from("/custom/bold.ttf")), None);

        assert_eq!(sources.bold[0], PathBuf::from("/custom/bold.ttf"));
        assert_eq!(sources.bold[1], PathBuf::from("/fonts/DejaVuSans-Bold.ttf"));
        assert_eq!(sources.regular, vec![PathBuf::from("/fonts/DejaVuSans.ttf")]);
    }

    #[test]
    fn test_system_sources_cover_both_faces() {
        let sources = FontSources::system();
        assert_eq!(sources.bold.len(), SYSTEM_FONT_DIRS.len());
        assert_eq!(sources.regular.len(), SYSTEM_FONT_DIRS.len());
    }

    #[test]
    fn test_system_face_when_installed() {
        let path = PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
        if !path.exists() {
            return;
        }
        let face = FontFace::resolve(&[path], 72.0);
        assert!(face.is_preferred());
        let short = face.text_width("Hi");
        let long = face.text_width("Hi there");
        assert!(short > 0);
        assert!(long > short);
    }

    #[test]
    fn test_blend_pixel() {
        let bg = Rgb([0, 0, 0]);
        let fg = Rgb([200, 100, 50]);
        assert_eq!(blend_pixel(bg, fg, 0.0), bg);
        assert_eq!(blend_pixel(bg, fg, 1.0), fg);
        assert_eq!(blend_pixel(bg, fg, 0.5), Rgb([100, 50, 25]));
        assert_eq!(blend_pixel(bg, fg, 2.0), fg);
    }
}
