//! Built-in resource catalogs
//!
//! Fixed descriptors for freely available e-Sword, Logos and amillennial
//! resources. Nothing is fetched over the network.

use std::fmt;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub title: &'static str,
    pub author: &'static str,
    pub resource_type: &'static str,
    pub topic: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub tags: &'static str,
}

/// Catalog sources, in import order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    ESword,
    Logos,
    Amillennial,
}

impl CatalogSource {
    pub const ALL: [CatalogSource; 3] = [CatalogSource::ESword, CatalogSource::Logos, CatalogSource::Amillennial];

    /// Selector value used in the import form
    pub fn key(&self) -> &'static str {
        match self {
            CatalogSource::ESword => "esword",
            CatalogSource::Logos => "logos",
            CatalogSource::Amillennial => "amillennial",
        }
    }

    /// Label used in import reports
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::ESword => "e-Sword",
            CatalogSource::Logos => "Logos",
            CatalogSource::Amillennial => "Amillennial",
        }
    }

    /// Resources from this catalog are flagged amillennial
    pub fn is_amillennial(&self) -> bool {
        matches!(self, CatalogSource::Amillennial)
    }

    pub fn descriptors(&self) -> &'static [ResourceDescriptor] {
        match self {
            CatalogSource::ESword => ESWORD,
            CatalogSource::Logos => LOGOS,
            CatalogSource::Amillennial => AMILLENNIAL,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const ESWORD_DOWNLOADS: &str = "https://www.e-sword.net/downloads.html";
const MONERGISM_AMILLENNIALISM: &str = "https://www.monergism.com/topics/eschatology/amillennialism";

static ESWORD: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        title: "Treasury of Scripture Knowledge",
        author: "R. A. Torrey",
        resource_type: "Commentary",
        topic: "Biblical Studies",
        description: "A classic Bible cross-reference resource with over 500,000 scripture references.",
        url: ESWORD_DOWNLOADS,
        tags: "e-sword,cross-reference,public domain",
    },
    ResourceDescriptor {
        title: "Matthew Henry's Complete Commentary",
        author: "Matthew Henry",
        resource_type: "Commentary",
        topic: "Biblical Studies",
        description: "A classic commentary covering the entire Bible, known for its practical and devotional insights.",
        url: ESWORD_DOWNLOADS,
        tags: "e-sword,commentary,public domain",
    },
    ResourceDescriptor {
        title: "Strong's Hebrew and Greek Dictionaries",
        author: "James Strong",
        resource_type: "Dictionary",
        topic: "Biblical Languages",
        description: "Lexical definitions for Hebrew and Greek words in the Bible.",
        url: ESWORD_DOWNLOADS,
        tags: "e-sword,lexicon,public domain",
    },
];

static LOGOS: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        title: "Lexham Bible Dictionary",
        author: "John D. Barry et al.",
        resource_type: "Dictionary",
        topic: "Biblical Studies",
        description: "A comprehensive Bible dictionary with over 7,000 articles on biblical topics.",
        url: "https://www.logos.com/product/36564/lexham-bible-dictionary",
        tags: "logos,dictionary,free",
    },
    ResourceDescriptor {
        title: "Faithlife Study Bible",
        author: "Faithlife Corporation",
        resource_type: "Study Bible",
        topic: "Biblical Studies",
        description: "A digital study Bible with notes, articles, and multimedia resources.",
        url: "https://www.logos.com/product/36338/faithlife-study-bible",
        tags: "logos,study bible,free",
    },
    ResourceDescriptor {
        title: "Bible Study Magazine: Issue 1",
        author: "Faithlife Corporation",
        resource_type: "Magazine",
        topic: "Biblical Studies",
        description: "First issue of Bible Study Magazine featuring articles on Bible study methods.",
        url: "https://www.logos.com/product/5127/bible-study-magazine-issue-1",
        tags: "logos,magazine,free",
    },
];

static AMILLENNIAL: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        title: "The Bible and the Future",
        author: "Anthony A. Hoekema",
        resource_type: "Book",
        topic: "Eschatology",
        description: "A classic amillennial treatment of biblical eschatology, covering topics such as the kingdom of God, the millennium, and the new earth.",
        url: "https://www.monergism.com/topics/eschatology",
        tags: "amillennial,eschatology,reformed",
    },
    ResourceDescriptor {
        title: "Amillennialism and the Age to Come",
        author: "Sam Storms",
        resource_type: "Article",
        topic: "Eschatology",
        description: "An article summarizing the amillennial perspective on the millennium and end times.",
        url: MONERGISM_AMILLENNIALISM,
        tags: "amillennial,eschatology,free",
    },
    ResourceDescriptor {
        title: "Kingdom Come: The Amillennial Alternative",
        author: "Sam Storms",
        resource_type: "Book",
        topic: "Eschatology",
        description: "A thorough examination of amillennial eschatology and a critique of premillennialism.",
        url: "https://www.monergism.com/kingdom-come-amillennial-alternative",
        tags: "amillennial,eschatology,reformed",
    },
    ResourceDescriptor {
        title: "Amillennialism 101",
        author: "Kim Riddlebarger",
        resource_type: "Article",
        topic: "Eschatology",
        description: "An introduction to amillennial eschatology, explaining key concepts and biblical support.",
        url: "https://www.monergism.com/amillennialism-101",
        tags: "amillennial,eschatology,introduction",
    },
    ResourceDescriptor {
        title: "A Case for Amillennialism",
        author: "Kim Riddlebarger",
        resource_type: "Book",
        topic: "Eschatology",
        description: "A readable defense of amillennialism that explains the viewpoint and responds to common objections.",
        url: "https://www.monergism.com/case-amillennialism",
        tags: "amillennial,eschatology,reformed",
    },
    ResourceDescriptor {
        title: "The Time Is at Hand",
        author: "Jay Adams",
        resource_type: "Book",
        topic: "Eschatology",
        description: "An amillennial commentary on the Book of Revelation that emphasizes its relevance for the church throughout history.",
        url: MONERGISM_AMILLENNIALISM,
        tags: "amillennial,revelation,commentary",
    },
    ResourceDescriptor {
        title: "The Amillennial View of the Kingdom of God",
        author: "Anthony Charles",
        resource_type: "Article",
        topic: "Eschatology",
        description: "An article explaining how amillennialists understand the kingdom of God in Scripture.",
        url: MONERGISM_AMILLENNIALISM,
        tags: "amillennial,kingdom of god,free",
    },
];

/// Resource types offered by the import form
pub const IMPORT_RESOURCE_TYPES: [&str; 6] = [
    "Book",
    "Article",
    "Commentary",
    "Dictionary",
    "Study Bible",
    "Magazine",
];

/// Topics offered by the import form
pub const IMPORT_TOPICS: [&str; 9] = [
    "Biblical Studies",
    "Theology",
    "Eschatology",
    "Church History",
    "Apologetics",
    "Pastoral Ministry",
    "Christian Living",
    "Biblical Languages",
    "Amillennialism",
];

/// Resource types offered by the library form
pub const RESOURCE_TYPES: [&str; 8] = [
    "Book",
    "Article",
    "Video",
    "Sermon",
    "Course",
    "Website",
    "Podcast",
    "Study Guide",
];

/// Topics offered by the library form
pub const RESOURCE_TOPICS: [&str; 12] = [
    "Biblical Studies",
    "Theology",
    "Church History",
    "Apologetics",
    "Pastoral Ministry",
    "Christian Living",
    "Evangelism",
    "Discipleship",
    "Marriage and Family",
    "Leadership",
    "Ethics",
    "Missions",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CatalogSource::ESword.descriptors().len(), 3);
        assert_eq!(CatalogSource::Logos.descriptors().len(), 3);
        assert_eq!(CatalogSource::Amillennial.descriptors().len(), 7);
    }

    #[test]
    fn test_titles_unique_within_each_catalog() {
        for source in CatalogSource::ALL {
            let descriptors = source.descriptors();
            for (i, d) in descriptors.iter().enumerate() {
                assert!(
                    descriptors[i + 1..].iter().all(|other| other.title != d.title),
                    "duplicate title {} in {}",
                    d.title,
                    source
                );
            }
        }
    }
}
