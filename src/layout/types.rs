//! Core types for the flow layout engine

/// Length in device pixels
pub type Px = i32;

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// Four-sided inset, used for child margins and container padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Insets {
    pub fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side
    pub fn uniform(value: Px) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn zero() -> Self {
        Self::uniform(0)
    }

    /// Left + right
    pub fn horizontal(&self) -> Px {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom
    pub fn vertical(&self) -> Px {
        self.top.saturating_add(self.bottom)
    }

    /// Copy with every negative side raised to zero
    pub fn clamped(&self) -> Self {
        Self::new(
            self.left.max(0),
            self.top.max(0),
            self.right.max(0),
            self.bottom.max(0),
        )
    }
}

/// Final child bounds in container-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Rect {
    pub fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rect of the given size with its top-left corner at `(left, top)`
    pub fn from_origin(left: Px, top: Px, size: Size) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(size.width),
            top.saturating_add(size.height),
        )
    }

    pub fn width(&self) -> Px {
        self.right - self.left
    }

    pub fn height(&self) -> Px {
        self.bottom - self.top
    }
}

/// How strictly a measure constraint binds the measured size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The result must equal the given size
    Exact,
    /// The result may be anything up to the given size
    AtMost,
    /// No constraint; the size is only a hint
    Unspecified,
}

/// A size constraint handed down during measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: Px,
}

impl MeasureSpec {
    pub fn new(mode: MeasureMode, size: Px) -> Self {
        Self { mode, size }
    }

    pub fn exact(size: Px) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    pub fn at_most(size: Px) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub fn unspecified(size: Px) -> Self {
        Self::new(MeasureMode::Unspecified, size)
    }

    /// Reconcile a desired size with this constraint
    ///
    /// Exact wins outright, AtMost caps the desired size, Unspecified
    /// leaves it untouched.
    pub fn resolve(&self, desired: Px) -> Px {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// Declared size preference along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// A fixed length
    Exact(Px),
    /// As large as the content needs
    #[default]
    FitContent,
    /// Everything the parent can offer
    Fill,
}

/// Declared width and height preferences of a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeIntent {
    pub width: Dimension,
    pub height: Dimension,
}

impl SizeIntent {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub fn exact(width: Px, height: Px) -> Self {
        Self::new(Dimension::Exact(width), Dimension::Exact(height))
    }

    pub fn fit_content() -> Self {
        Self::new(Dimension::FitContent, Dimension::FitContent)
    }

    pub fn fill() -> Self {
        Self::new(Dimension::Fill, Dimension::Fill)
    }
}

/// Whether a child takes part in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Measured and placed, but not drawn by the host
    Invisible,
    /// Skipped by both passes
    Gone,
}

/// Per-child layout parameters, owned by the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildSpec {
    pub size: SizeIntent,
    pub margin: Insets,
    pub visibility: Visibility,
}

impl ChildSpec {
    pub fn new(size: SizeIntent) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_gone(&self) -> bool {
        self.visibility == Visibility::Gone
    }
}

/// A child's size as produced by one measure pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredChild {
    /// Index of the child in the container's child list
    pub index: usize,
    /// Raw measured box, margins excluded
    pub size: Size,
    pub margin: Insets,
}

impl MeasuredChild {
    /// Measured box plus margins, the unit rows are built from
    pub fn margin_box(&self) -> Size {
        Size::new(
            self.size.width.saturating_add(self.margin.horizontal()),
            self.size.height.saturating_add(self.margin.vertical()),
        )
    }
}

/// A run of consecutive measured children sharing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// First member, as a position in the measured-child list
    pub start: usize,
    /// One past the last member
    pub end: usize,
    /// Tallest member margin box
    pub height: Px,
}

impl Row {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Final bounds of one child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedChild {
    pub index: usize,
    pub rect: Rect,
}
