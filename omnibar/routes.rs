//! Destination URL resolution.

use crate::workflow::{
  ItemKind,
  MenuItem,
};

/// Map a selected item to its destination path.
///
/// Pure and total: the kind table is a static exhaustive match over the
/// closed [`ItemKind`] enum, so there is no missing-entry error path.
pub fn resolve(item: &MenuItem) -> String {
  let base = match item.kind {
    ItemKind::Story => "/stories",
    ItemKind::Profile => "/profiles",
    ItemKind::Topic => "/topics",
    ItemKind::Chat => "/chats",
  };
  format!("{base}/{}", item.value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_kind_resolves_to_its_base_path() {
    let cases = [
      (ItemKind::Story, "story-42", "/stories/story-42"),
      (ItemKind::Profile, "ada", "/profiles/ada"),
      (ItemKind::Topic, "space", "/topics/space"),
      (ItemKind::Chat, "chat-7", "/chats/chat-7"),
    ];
    for (kind, value, expected) in cases {
      let item = MenuItem::new(kind, value, value);
      assert_eq!(resolve(&item), expected);
    }
  }
}
