use commstat_model::SortKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMessage<K> {
    Activate(K), // Icon click: enable the field or flip its direction
    Resync,      // Re-read the filter form and repaint icons
}

impl<K: SortKey> SortMessage<K> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate(_) => "Sort::Activate",
            Self::Resync => "Sort::Resync",
        }
    }
}

impl<K: SortKey> fmt::Display for SortMessage<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activate(field) => {
                write!(f, "Sort::Activate({})", field.as_str())
            }
            Self::Resync => write!(f, "Sort::Resync"),
        }
    }
}
