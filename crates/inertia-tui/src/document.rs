/// A block of text lines shown in the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub lines: Vec<String>,
}

impl Document {
    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| line.replace('\t', "    "))
            .collect();
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Built-in text long enough to glide through
    pub fn sample() -> Self {
        let mut text = String::new();
        for i in 1..=400 {
            let marker = if i % 25 == 0 { "  ── milestone ──" } else { "" };
            text.push_str(&format!(
                "{:>4}  The quick brown fox jumps over the lazy dog.{}\n",
                i, marker
            ));
        }
        Self::from_text("sample", &text)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
