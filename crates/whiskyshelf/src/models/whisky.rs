use serde::Deserialize;

use whiskyshelf_core::whisky::Whisky;

/// Request payload for creating a new whisky.
#[derive(Debug, Deserialize)]
pub struct CreateWhisky {
    pub name: String,
    pub origin: String,
}

impl CreateWhisky {
    /// Converts the create request into an unsaved whisky.
    pub fn into_whisky(self) -> Whisky {
        Whisky::new(self.name, self.origin)
    }
}

/// Request payload for updating a whisky.
///
/// Both fields are required: an update always replaces the pair, there is
/// no partial-update form.
#[derive(Debug, Deserialize)]
pub struct UpdateWhisky {
    pub name: String,
    pub origin: String,
}

impl UpdateWhisky {
    /// Converts the update request into the replacement field values.
    pub fn into_whisky(self) -> Whisky {
        Whisky::new(self.name, self.origin)
    }
}
