//! The ability tree built into the binary.

use abilities::{Ability, AbilityBook, Result};

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: u64,
    links: &'static [&'static str],
}

pub(crate) const BASE: &str = "novice";

static BASE_ENTRY: Entry = Entry {
    id: BASE,
    title: "Novice",
    description: "Where every adventurer starts.",
    price: 0,
    links: &["strength", "agility", "intellect"],
};

const ENTRIES: &[Entry] = &[
    Entry {
        id: "strength",
        title: "Strength",
        description: "Hit harder.",
        price: 1,
        links: &["heavy-blow", "endurance"],
    },
    Entry {
        id: "agility",
        title: "Agility",
        description: "Move faster.",
        price: 1,
        links: &["dodge", "endurance"],
    },
    Entry {
        id: "intellect",
        title: "Intellect",
        description: "Think faster.",
        price: 1,
        links: &["focus"],
    },
    Entry {
        id: "heavy-blow",
        title: "Heavy Blow",
        description: "A slow attack that staggers.",
        price: 3,
        links: &["whirlwind"],
    },
    Entry {
        id: "endurance",
        title: "Endurance",
        description: "Fight for longer.",
        price: 2,
        links: &["arcane-shield"],
    },
    Entry {
        id: "dodge",
        title: "Dodge",
        description: "Roll out of harm's way.",
        price: 2,
        links: &["whirlwind"],
    },
    Entry {
        id: "focus",
        title: "Focus",
        description: "Spells cost less.",
        price: 2,
        links: &["arcane-shield"],
    },
    Entry {
        id: "whirlwind",
        title: "Whirlwind",
        description: "Strike everything nearby.",
        price: 5,
        links: &[],
    },
    Entry {
        id: "arcane-shield",
        title: "Arcane Shield",
        description: "Absorb the next hit.",
        price: 4,
        links: &[],
    },
];

impl Entry {
    fn ability(&self) -> Ability<String> {
        Ability::new(self.id.to_string())
            .with_title(self.title)
            .with_description(self.description)
            .with_price(self.price)
    }

    fn links(&self) -> Vec<String> {
        self.links.iter().map(|l| l.to_string()).collect()
    }
}

/// Build a fresh copy of the sample tree with nothing but the base learned.
pub(crate) fn book() -> Result<AbilityBook<String>> {
    let mut book = AbilityBook::new(BASE_ENTRY.ability());
    for entry in ENTRIES {
        book.insert(entry.ability())?;
    }

    for entry in iter_entries() {
        book.link(&entry.id.to_string(), &entry.links())?;
    }

    Ok(book)
}

fn iter_entries() -> impl Iterator<Item = &'static Entry> {
    std::iter::once(&BASE_ENTRY).chain(ENTRIES.iter())
}

#[cfg(test)]
mod test {
    use super::*;
    use reachability::Traversable;

    #[test]
    fn sample_builds() {
        let book = book().unwrap();

        assert_eq!(book.abilities().count(), ENTRIES.len() + 1);
        assert_eq!(book.base().title(), "Novice");
        assert_eq!(book.score(), 0);
    }

    #[test]
    fn links_are_undirected() {
        let book = book().unwrap();

        let links = book.links(&"whirlwind".to_string()).unwrap();
        assert_eq!(links, &["heavy-blow".to_string(), "dodge".to_string()][..]);
    }

    #[test]
    fn only_first_tier_is_learnable() {
        let mut book = book().unwrap();
        book.earn(100);

        let learnable: Vec<String> = book
            .abilities()
            .filter(|a| book.can_learn(&a.id().to_string()))
            .map(|a| a.title().to_string())
            .collect();
        assert_eq!(learnable, vec!["Strength", "Agility", "Intellect"]);
    }
}
