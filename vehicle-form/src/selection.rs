use std::fmt;

pub const MIN_IMAGES: usize = 1;
pub const MAX_IMAGES: usize = 10;

/// User-visible warnings raised by selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionWarning {
    /// A batch was refused because it would exceed the bound.
    TooMany { max_images: usize },
    /// Lowering the bound dropped images from the end of the selection.
    Truncated { max_images: usize, removed: usize },
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooMany { max_images } => write!(
                f,
                "You can only upload a maximum of {max_images} images."
            ),
            Self::Truncated {
                max_images,
                removed,
            } => write!(
                f,
                "You can only upload a maximum of {max_images} images. \
                 {removed} image(s) were removed."
            ),
        }
    }
}

/// Ordered images chosen for upload, bounded by a user-adjustable maximum.
///
/// Each entry carries its file and preview together, so removing one always
/// removes both.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSelection<T> {
    images: Vec<T>,
    max_images: usize,
}

impl<T> Default for ImageSelection<T> {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            max_images: MAX_IMAGES,
        }
    }
}

impl<T> ImageSelection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_images(&self) -> usize {
        self.max_images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.images
    }

    /// Change the bound, clamped to `MIN_IMAGES..=MAX_IMAGES`. Images beyond
    /// the new bound are dropped.
    pub fn set_max_images(&mut self, requested: usize) -> Option<SelectionWarning> {
        let max_images = requested.clamp(MIN_IMAGES, MAX_IMAGES);
        self.max_images = max_images;

        if self.images.len() > max_images {
            let removed = self.images.len() - max_images;
            self.images.truncate(max_images);
            return Some(SelectionWarning::Truncated {
                max_images,
                removed,
            });
        }
        None
    }

    /// Append a batch, deriving each entry (and its preview) only once the
    /// whole batch is known to fit. A batch that doesn't fit is refused
    /// whole.
    pub fn select<F>(
        &mut self,
        batch: Vec<F>,
        derive: impl FnMut(F) -> T,
    ) -> Result<(), SelectionWarning> {
        if self.images.len() + batch.len() > self.max_images {
            return Err(SelectionWarning::TooMany {
                max_images: self.max_images,
            });
        }
        self.images.extend(batch.into_iter().map(derive));
        Ok(())
    }

    /// Remove the entry at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}
