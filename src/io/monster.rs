//! Sea monster pattern template parsing
//!
//! The template is a small block of text where `#` marks a required SET
//! pixel and every other character is ignored background. The canonical
//! template ships built in; a replacement can be supplied on the command
//! line.

use std::path::Path;

use crate::io::error::{Result, StitchError, pattern_error};

/// The canonical sea monster: 20 pixels wide, 3 tall, 15 SET pixels
pub const BUILTIN_TEMPLATE: &str = "                  # \n\
                                    #    ##    ##    ###\n \
                                    #  #  #  #  #  #   ";

/// A fixed pixel pattern described by relative SET offsets
///
/// An instance is recognized at an anchor position when every offset maps
/// to a SET pixel; background cells of the template impose no constraint.
#[derive(Debug, Clone)]
pub struct SeaMonster {
    offsets: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl SeaMonster {
    /// Parse a pattern template
    ///
    /// # Errors
    ///
    /// Returns an error if the template has no lines or no `#` cells.
    pub fn parse(template: &str) -> Result<Self> {
        let normalized = template.replace('\r', "");
        let lines: Vec<&str> = normalized.lines().collect();
        if lines.is_empty() {
            return Err(pattern_error(&"template has no lines"));
        }

        let mut offsets = Vec::new();
        let mut width = 0;
        for (y, line) in lines.iter().enumerate() {
            width = width.max(line.chars().count());
            for (x, character) in line.chars().enumerate() {
                if character == '#' {
                    offsets.push((x, y));
                }
            }
        }

        if offsets.is_empty() {
            return Err(pattern_error(&"template marks no SET pixels"));
        }

        Ok(Self {
            offsets,
            width,
            height: lines.len(),
        })
    }

    /// Parse the built-in canonical template
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in template is well formed.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TEMPLATE)
    }

    /// Parse a template from a file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content fails
    /// [`Self::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path_buf).map_err(|e| StitchError::FileSystem {
            path: path_buf,
            operation: "read pattern template",
            source: e,
        })?;
        Self::parse(&raw)
    }

    /// Relative (col, row) offsets that must be SET for a match
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Bounding box width of the pattern
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Bounding box height of the pattern
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of SET pixels one instance covers
    pub fn set_pixels(&self) -> usize {
        self.offsets.len()
    }
}
