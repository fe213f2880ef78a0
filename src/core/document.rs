//! Paragraph-level document model for generated certificates

/// Horizontal alignment of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
impl Alignment {
    /// Parse a WordprocessingML `w:jc` value
    pub fn from_justification(val: &str) -> Self {
        match val {
            "center" => Self::Center,
            "right" | "end" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Line spacing rule. Certificates only ever use single spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpacing {
    #[default]
    Single,
}

/// One block of document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    alignment: Alignment,
    line_spacing: LineSpacing,
    /// Space after the paragraph, in points
    space_after: u32,
}

impl Paragraph {
    /// Create a paragraph with single spacing and no space after
    pub fn new(text: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            alignment,
            line_spacing: LineSpacing::Single,
            space_after: 0,
        }
    }

    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Left)
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Center)
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self::new(text, Alignment::Right)
    }

    /// An empty left-aligned paragraph used as vertical spacing
    pub fn blank() -> Self {
        Self::left("")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn line_spacing(&self) -> LineSpacing {
        self.line_spacing
    }

    pub fn space_after(&self) -> u32 {
        self.space_after
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// An ordered sequence of paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create an empty document with room for `capacity` paragraphs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paragraphs: Vec::with_capacity(capacity),
        }
    }

    /// Append a paragraph at the end
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }
}

#[cfg(test)]
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate over paragraph texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.iter().map(Paragraph::text)
    }

    /// Index of the first paragraph whose text equals `text`
    pub fn position(&self, text: &str) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.text == text)
    }
}

impl FromIterator<Paragraph> for Document {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Self {
            paragraphs: iter.into_iter().collect(),
        }
    }
}
