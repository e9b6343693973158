//! Static category catalog.
//!
//! Each category maps a stable id and display name to the search query sent
//! verbatim to the search endpoint. The catalog is fixed at compile time and
//! never mutates at runtime.

/// A named topic mapped to a fixed search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub query: &'static str,
}

const fn cat(id: &'static str, name: &'static str, query: &'static str) -> Category {
    Category { id, name, query }
}

/// Id of the category selected at startup when nothing else is configured.
pub const DEFAULT_CATEGORY_ID: &str = "science";

/// Every selectable category, in display order.
pub static CATEGORIES: &[Category] = &[
    // Science & technology
    cat("science", "Science", "science scientific research discoveries"),
    cat("technology", "Technology", "technology technological advancement innovation"),
    cat("space", "Space", "space exploration astronomy cosmos"),
    cat("ai-robotics", "AI & Robotics", "artificial intelligence robotics machine learning"),
    cat("computer-science", "Computer Science", "computer science programming software"),
    cat("physics", "Physics", "physics physical science quantum mechanics"),
    cat("chemistry", "Chemistry", "chemistry chemical science molecules"),
    cat("biology", "Biology", "biology life science organisms"),
    cat("mathematics", "Mathematics", "mathematics mathematical concepts theorems"),
    cat("engineering", "Engineering", "engineering mechanical electrical civil"),
    cat("astronomy", "Astronomy", "astronomy celestial objects planets stars"),
    cat("electronics", "Electronics", "electronics circuits electronic devices"),
    cat("quantum-physics", "Quantum Physics", "quantum physics mechanics particle physics"),
    cat("neuroscience", "Neuroscience", "neuroscience brain research neural"),
    // History
    cat("history", "History", "history historical events civilization"),
    cat("ancient-history", "Ancient History", "ancient history civilization archaeology"),
    cat("world-wars", "World Wars", "world war military history conflict"),
    cat("medieval-history", "Medieval History", "medieval history middle ages"),
    cat("ancient-civilizations", "Ancient Civilizations", "ancient civilizations empires cultures"),
    cat("military-history", "Military History", "military history warfare battles strategy"),
    cat("renaissance", "Renaissance", "renaissance art culture history"),
    cat("historical-figures", "Historical Figures", "historical figures famous people biography"),
    cat("archaeology", "Archaeology", "archaeology archaeological discoveries ancient"),
    cat("mythology", "Mythology", "mythology myths legends folklore"),
    // Arts
    cat("art", "Art", "art artwork artists painting sculpture"),
    cat("music", "Music", "music musicians bands composers"),
    cat("cinema", "Cinema", "cinema film movies directors"),
    cat("literature", "Literature", "literature books authors writing"),
    cat("architecture", "Architecture", "architecture buildings design structures"),
    cat("theater", "Theater", "theater theatre drama performing arts"),
    cat("dance", "Dance", "dance dancing choreography performers"),
    cat("photography", "Photography", "photography photographers images camera"),
    cat("animation", "Animation", "animation animated films cartoons"),
    cat("comics", "Comics", "comics graphic novels comic books"),
    cat("classical-music", "Classical Music", "classical music orchestra symphony"),
    cat("popular-music", "Popular Music", "popular music pop rock jazz"),
    // Nature
    cat("nature", "Nature", "nature natural world wildlife environment"),
    cat("animals", "Animals", "animals wildlife species fauna"),
    cat("plants", "Plants", "plants flora botany vegetation"),
    cat("ocean-life", "Ocean Life", "marine life ocean sea creatures"),
    cat("climate", "Climate", "climate weather atmospheric science"),
    cat("birds", "Birds", "birds ornithology avian species"),
    cat("mammals", "Mammals", "mammals mammalian species animals"),
    cat("insects", "Insects", "insects entomology bugs arthropods"),
    cat("forests", "Forests", "forests woodland trees ecosystem"),
    cat("marine-biology", "Marine Biology", "marine biology ocean life sea"),
    cat("ecosystems", "Ecosystems", "ecosystems ecology environment habitat"),
    cat("conservation", "Conservation", "conservation preservation wildlife protection"),
    // Society
    cat("philosophy", "Philosophy", "philosophy philosophical thinking concepts"),
    cat("psychology", "Psychology", "psychology human behavior mind"),
    cat("religion", "Religion", "religion religious beliefs faith"),
    cat("politics", "Politics", "politics political systems government"),
    cat("economics", "Economics", "economics economy financial systems"),
    cat("sociology", "Sociology", "sociology social science society"),
    cat("education", "Education", "education learning teaching methods"),
    cat("law", "Law", "law legal system justice courts"),
    cat("ethics", "Ethics", "ethics moral philosophy principles"),
    cat("anthropology", "Anthropology", "anthropology human cultures society"),
    // Sports
    cat("sports", "Sports", "sports athletics competition games"),
    cat("olympics", "Olympics", "olympics olympic games athletes"),
    cat("football", "Football", "football soccer sport teams"),
    cat("basketball", "Basketball", "basketball nba sport teams"),
    cat("tennis", "Tennis", "tennis sport players tournaments"),
    cat("martial-arts", "Martial Arts", "martial arts fighting techniques"),
    cat("chess", "Chess", "chess strategy board game"),
    cat("esports", "E-sports", "esports competitive gaming tournaments"),
    // Innovation
    cat("inventions", "Inventions", "inventions inventors innovation technology"),
    cat("innovation", "Innovation", "innovation technological advancement progress"),
    cat("space-technology", "Space Technology", "space technology rockets satellites"),
    cat("green-technology", "Green Technology", "green technology sustainable eco-friendly"),
    cat("transportation", "Transportation", "transportation vehicles mobility"),
    cat("biotechnology", "Biotechnology", "biotechnology genetic engineering"),
    cat("nanotechnology", "Nanotechnology", "nanotechnology molecular technology"),
];

/// Categories shown as chips in the navbar when no search is active.
pub const POPULAR: [&str; 8] = [
    "science",
    "history",
    "technology",
    "nature",
    "art",
    "space",
    "animals",
    "music",
];

/// A named group of category ids for the category browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

/// Groups shown (collapsed by default) in the category browser.
pub static GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Science & Technology",
        members: &[
            "science",
            "technology",
            "space",
            "ai-robotics",
            "computer-science",
            "physics",
            "chemistry",
            "biology",
            "mathematics",
            "engineering",
            "astronomy",
            "electronics",
            "quantum-physics",
            "neuroscience",
        ],
    },
    CategoryGroup {
        name: "History & Culture",
        members: &[
            "history",
            "ancient-history",
            "world-wars",
            "medieval-history",
            "ancient-civilizations",
            "military-history",
            "renaissance",
            "historical-figures",
            "archaeology",
            "mythology",
        ],
    },
    CategoryGroup {
        name: "Arts & Entertainment",
        members: &[
            "art",
            "music",
            "cinema",
            "literature",
            "architecture",
            "theater",
            "dance",
            "photography",
            "animation",
            "comics",
            "classical-music",
            "popular-music",
        ],
    },
    CategoryGroup {
        name: "Nature & Environment",
        members: &[
            "nature",
            "animals",
            "plants",
            "ocean-life",
            "climate",
            "birds",
            "mammals",
            "insects",
            "forests",
            "marine-biology",
            "ecosystems",
            "conservation",
        ],
    },
    CategoryGroup {
        name: "Society & Philosophy",
        members: &[
            "philosophy",
            "psychology",
            "religion",
            "politics",
            "economics",
            "sociology",
            "education",
            "law",
            "ethics",
            "anthropology",
        ],
    },
    CategoryGroup {
        name: "Sports & Recreation",
        members: &[
            "sports",
            "olympics",
            "football",
            "basketball",
            "tennis",
            "martial-arts",
            "chess",
            "esports",
        ],
    },
    CategoryGroup {
        name: "Innovation & Technology",
        members: &[
            "inventions",
            "innovation",
            "space-technology",
            "green-technology",
            "transportation",
            "ai-robotics",
            "biotechnology",
            "nanotechnology",
        ],
    },
];

impl CategoryGroup {
    /// Resolve the group's member ids against the catalog.
    pub fn categories(&self) -> impl Iterator<Item = &'static Category> + '_ {
        self.members.iter().filter_map(|id| find(id))
    }
}

/// Look up a category by its stable id.
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// The startup category.
pub fn default_category() -> &'static Category {
    // The default id is part of the static table (checked in tests).
    find(DEFAULT_CATEGORY_ID).unwrap_or(&CATEGORIES[0])
}

/// Navbar chips in display order.
pub fn popular() -> impl Iterator<Item = &'static Category> {
    POPULAR.iter().filter_map(|id| find(id))
}

/// Categories whose display name contains `query`, case-insensitively.
///
/// An empty query matches every category.
pub fn filter_by_name(query: &str) -> Vec<&'static Category> {
    let needle = query.to_lowercase();
    CATEGORIES
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}
