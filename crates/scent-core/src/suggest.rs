//! Autocompletion vocabulary for houses and notes.
//!
//! Each vocabulary is a static seed list plus every distinct value observed in
//! the collection. Growth is one-way: deleting a fragrance does not remove its
//! terms. The index is plain owned state; callers hold it and feed it through
//! [`SuggestionIndex::observe`].

use std::collections::HashSet;

use crate::fragrance::Fragrance;

/// Houses offered before anything has been catalogued.
pub const SEED_HOUSES: &[&str] = &[
  "Chanel", "Dior", "Yves Saint Laurent", "Gucci", "Giorgio Armani", "Versace",
  "Prada", "Dolce & Gabbana", "Givenchy", "Hermès", "Burberry", "Calvin Klein",
  "Hugo Boss", "Tommy Hilfiger", "Lacoste", "Jean Paul Gaultier", "Creed",
  "Maison Francis Kurkdjian", "Amouage", "Parfums de Marly", "Xerjoff", "Initio",
  "Memo Paris", "Byredo", "Diptyque", "Le Labo", "Frederic Malle",
  "Maison Margiela", "Penhaligon's", "Ormonde Jayne", "Lattafa Perfumes",
  "Rasasi", "Ard Al Zaafaran", "Afnan", "Al Haramain", "Swiss Arabian", "Ajmal",
  "Khadlaj", "Nabeel", "Armaf", "Louis Vuitton", "Zoologist",
  "Imaginary Authors", "Gallivant", "House of Matriarch", "4160 Tuesdays",
  "Slumberhouse", "Bortnikoff", "Rogue Perfumery", "DS & Durga",
  "Bath & Body Works", "Victoria's Secret", "Abercrombie & Fitch", "Coach",
  "Michael Kors",
];

/// Notes offered before anything has been catalogued.
pub const SEED_NOTES: &[&str] = &[
  "Bergamot", "Lemon", "Orange", "Grapefruit", "Lime", "Neroli", "Lavender",
  "Rose", "Jasmine", "Violet", "Ylang-Ylang", "Iris", "Sandalwood", "Cedarwood",
  "Vetiver", "Patchouli", "Musk", "Amber", "Vanilla", "Tobacco", "Leather",
  "Oud", "Cinnamon", "Cardamom", "Apple", "Orange Blossom", "Lily-of-the-Valley",
  "Tonka Bean", "Black Currant", "Pink Pepper", "Cedar", "Incense", "Ginger",
  "Oakmoss", "Ambergris", "Saffron", "Pineapple", "Birch", "Mandarin Orange",
  "Petitgrain", "Seaweed", "Clary Sage", "Rosemary", "Green Notes", "Nutmeg",
  "Orris Root", "Freesia", "Green Tea", "Guaiac Wood", "Labdanum", "Plum",
  "Geranium", "Sichuan Pepper", "Star Anise", "Ambroxan", "Elemi", "Olibanum",
  "Blood Orange", "Juniper", "Coriander", "Basil", "Peach", "Melon", "Sea Salt",
  "Cypress", "Coconut", "Benzoin", "Honey", "Black Tea", "Frankincense",
  "Woody Notes", "Black Pepper", "Violet Leaf", "Cashmeran", "White Musk",
  "Moss", "Driftwood", "Salt", "Papyrus", "Tarragon", "Pepper", "Hyacinth",
  "White Pepper", "Aldehydes", "Blackberry", "Mandarin", "Pear", "Peony",
  "Gardenia", "Magnolia", "Heliotrope", "Tiare Flower", "Carnation",
  "Honeysuckle", "Chamomile", "Mate", "Beeswax", "Coumarin", "Myrrh",
  "Fir Balsam", "Pine", "Iso E Super", "Hinoki Wood", "Wormwood", "Rum",
  "Whiskey", "Cognac", "Coffee", "Cacao", "Chocolate", "Praline", "Caramel",
  "Almond", "Hazelnut", "Pistachio", "Chestnut", "Mango", "Lychee",
  "Passionfruit", "Pomegranate", "Fig", "Raspberry", "Cherry", "Metallic Notes",
  "Smoke", "Suede", "Hay", "Earthy Notes", "Solar Notes", "Powdery Notes",
];

// ─── Vocabulary ──────────────────────────────────────────────────────────────

/// An insertion-ordered set of terms, deduplicated case-insensitively. The
/// casing of the first insertion wins.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
  terms: Vec<String>,
  keys:  HashSet<String>,
}

impl Vocabulary {
  pub fn from_seed(seed: &[&str]) -> Self {
    let mut vocab = Self::default();
    for term in seed {
      vocab.insert(term);
    }
    vocab
  }

  /// Add `term` unless a case-insensitive equal is already present. Returns
  /// whether it was new.
  pub fn insert(&mut self, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() || !self.keys.insert(term.to_lowercase()) {
      return false;
    }
    self.terms.push(term.to_owned());
    true
  }

  pub fn contains(&self, term: &str) -> bool { self.keys.contains(&term.trim().to_lowercase()) }

  pub fn len(&self) -> usize { self.terms.len() }

  pub fn is_empty(&self) -> bool { self.terms.is_empty() }

  /// All terms in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &str> { self.terms.iter().map(String::as_str) }

  /// Terms containing `fragment` (case-insensitive), alphabetically. An empty
  /// fragment returns every term.
  pub fn matching(&self, fragment: &str) -> Vec<&str> {
    let needle = fragment.trim().to_lowercase();
    let mut hits: Vec<&str> = self
      .iter()
      .filter(|t| t.to_lowercase().contains(&needle))
      .collect();
    hits.sort_by_cached_key(|t| t.to_lowercase());
    hits
  }
}

// ─── SuggestionIndex ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SuggestionIndex {
  houses: Vocabulary,
  notes:  Vocabulary,
}

impl SuggestionIndex {
  /// An index holding only the seed vocabulary.
  pub fn seeded() -> Self {
    Self {
      houses: Vocabulary::from_seed(SEED_HOUSES),
      notes:  Vocabulary::from_seed(SEED_NOTES),
    }
  }

  /// Seed vocabulary plus everything in `records`.
  pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Fragrance>) -> Self {
    let mut index = Self::seeded();
    for f in records {
      index.observe(f);
    }
    index
  }

  /// Record the house and every note of `fragrance`.
  pub fn observe(&mut self, fragrance: &Fragrance) {
    self.houses.insert(&fragrance.house);
    for note in fragrance.notes.all() {
      self.notes.insert(note);
    }
  }

  pub fn houses(&self) -> &Vocabulary { &self.houses }

  pub fn notes(&self) -> &Vocabulary { &self.notes }
}

impl Default for SuggestionIndex {
  fn default() -> Self { Self::seeded() }
}
