//! Portfolio filtering with a fade-out before items are hidden.
//!
//! The fade timer itself lives in the caller. Each fade-out carries a
//! generation number; the timer hides the item only if no later filter
//! touched it, so the outcome does not depend on reading a clock.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value; a missing value is treated as a
    /// category that matches no item.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("all") => Filter::All,
            Some(other) => Filter::Category(other.to_string()),
            None => Filter::Category(String::new()),
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(want) => category == Some(want.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemDisplay {
    Shown,
    FadingOut,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemChange {
    /// Display the item, then fade it in.
    Show(usize),
    /// Start fading the item out, then call [`Portfolio::finish_fade`] with
    /// the same index and generation once the fade duration has passed.
    FadeOut { index: usize, generation: u64 },
}

#[derive(Clone, Debug)]
pub struct PortfolioItem {
    pub category: Option<String>,
    pub display: ItemDisplay,
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub struct Portfolio {
    items: Vec<PortfolioItem>,
    active: Filter,
}

impl Portfolio {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let items = categories
            .into_iter()
            .map(|c| PortfolioItem {
                category: c.map(Into::into),
                display: ItemDisplay::Shown,
                generation: 0,
            })
            .collect();
        Self {
            items,
            active: Filter::All,
        }
    }

    pub fn apply(&mut self, filter: Filter) -> Vec<ItemChange> {
        let mut changes = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter_mut().enumerate() {
            if filter.matches(item.category.as_deref()) {
                if item.display != ItemDisplay::Shown {
                    item.generation += 1;
                }
                item.display = ItemDisplay::Shown;
                changes.push(ItemChange::Show(index));
            } else {
                // Already fading or hidden items keep their generation, so
                // the timer scheduled first still hides them.
                if item.display == ItemDisplay::Shown {
                    item.generation += 1;
                    item.display = ItemDisplay::FadingOut;
                }
                changes.push(ItemChange::FadeOut {
                    index,
                    generation: item.generation,
                });
            }
        }
        self.active = filter;
        changes
    }

    /// Hide `index` if it is still fading out under `generation`. Returns
    /// true if the item was hidden by this call.
    pub fn finish_fade(&mut self, index: usize, generation: u64) -> bool {
        match self.items.get_mut(index) {
            Some(item)
                if item.generation == generation && item.display == ItemDisplay::FadingOut =>
            {
                item.display = ItemDisplay::Hidden;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn active(&self) -> &Filter {
        &self.active
    }

    #[inline]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.items
            .get(index)
            .map(|it| it.display != ItemDisplay::Hidden)
            .unwrap_or(false)
    }
}
