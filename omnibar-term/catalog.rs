//! Static demo catalog standing in for the real data layer.

use omnibar::{
  ItemKind,
  MenuItem,
  ResultSource,
  Workflow,
};

const STORIES: &[(&str, &str)] = &[
  ("story-42", "Mars rover lands in Jezero crater"),
  ("story-57", "Deep sea vents teem with unknown life"),
  ("story-63", "City orchards are quietly feeding neighborhoods"),
  ("story-71", "The last telegraph office closes"),
];

const PROFILES: &[(&str, &str)] = &[
  ("ada", "Ada - planetary geology"),
  ("bix", "Bix - long-form science writing"),
  ("cora", "Cora - ocean photography"),
];

const TOPICS: &[(&str, &str)] = &[
  ("space", "Space"),
  ("oceans", "Oceans"),
  ("cities", "Cities"),
];

const CHATS: &[(&str, &str)] = &[
  ("chat-1", "Explain orbital mechanics simply"),
  ("chat-2", "Plan a week of low-waste meals"),
];

pub struct DemoSource;

impl DemoSource {
  pub fn new() -> Self {
    Self
  }

  fn pool(workflow: Workflow) -> Vec<MenuItem> {
    let rows: &[(ItemKind, &[(&str, &str)])] = match workflow {
      Workflow::Story => &[(ItemKind::Story, STORIES)],
      Workflow::Chat => &[(ItemKind::Chat, CHATS)],
      Workflow::Image => &[(ItemKind::Topic, TOPICS)],
      Workflow::Search => &[
        (ItemKind::Story, STORIES),
        (ItemKind::Profile, PROFILES),
        (ItemKind::Topic, TOPICS),
      ],
    };
    rows
      .iter()
      .flat_map(|(kind, entries)| {
        entries
          .iter()
          .map(|(value, label)| MenuItem::new(*kind, *value, *label))
      })
      .collect()
  }
}

impl ResultSource for DemoSource {
  fn search(&self, workflow: Workflow, query: &str) -> Vec<MenuItem> {
    let needle = query.to_lowercase();
    Self::pool(workflow)
      .into_iter()
      .filter(|item| item.label.to_lowercase().contains(&needle))
      .collect()
  }

  fn trending(&self, workflow: Workflow) -> Vec<MenuItem> {
    let mut items = Self::pool(workflow);
    items.truncate(5);
    items
  }
}
