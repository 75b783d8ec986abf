//! UI cursor state for carousels and option pickers.

/// Index into a carousel of `len` slides. Movement wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
}

impl CarouselCursor {
    /// Returns `None` for an empty carousel. Out-of-range indices wrap.
    pub fn new(len: usize, index: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: index % len,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: self.next_index(),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.prev_index(),
            ..self
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub label_key: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label_key: label_key.into(),
        }
    }
}

/// A fixed set of options with exactly one selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSelector {
    options: Vec<SelectOption>,
    selected: usize,
}

impl OptionSelector {
    /// First option starts selected. `None` for an empty option list.
    pub fn new(options: Vec<SelectOption>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            selected: 0,
        })
    }

    /// Selects `id` if it is one of the options; returns whether it was.
    pub fn select(&mut self, id: &str) -> bool {
        match self.options.iter().position(|o| o.id == id) {
            Some(pos) => {
                self.selected = pos;
                true
            }
            None => false,
        }
    }

    pub fn with_selected(mut self, id: Option<&str>) -> Self {
        if let Some(id) = id {
            self.select(id);
        }
        self
    }

    pub fn selected(&self) -> &SelectOption {
        &self.options[self.selected]
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().id == id
    }
}
