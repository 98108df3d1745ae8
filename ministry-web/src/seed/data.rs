//! Reference content inserted by the seed routines

/// A denomination inserted on first run
pub struct DenominationSeed {
    pub name: &'static str,
    pub description: &'static str,
}

/// A belief keyed by denomination name
pub struct BeliefSeed {
    pub topic: &'static str,
    pub denomination: &'static str,
    pub summary: &'static str,
    pub scripture_references: &'static str,
}

pub const DENOMINATIONS: &[DenominationSeed] = &[
    DenominationSeed {
        name: "Roman Catholic",
        description: "The largest Christian church, led by the Pope and with a history dating back almost 2,000 years.",
    },
    DenominationSeed {
        name: "Eastern Orthodox",
        description: "The second-largest Christian church, with a rich tradition of liturgy and spirituality.",
    },
    DenominationSeed {
        name: "Lutheran",
        description: "Protestant denomination originating from the teachings of Martin Luther in the 16th century.",
    },
    DenominationSeed {
        name: "Baptist",
        description: "Protestant denomination emphasizing believer's baptism and the autonomy of local churches.",
    },
    DenominationSeed {
        name: "Methodist",
        description: "Protestant denomination founded by John Wesley with an emphasis on sanctification and social justice.",
    },
    DenominationSeed {
        name: "Presbyterian",
        description: "Protestant denomination with roots in Calvinism and known for its representative form of church government.",
    },
    DenominationSeed {
        name: "Anglican/Episcopal",
        description: "Protestant denomination that maintains traditions and practices from both Catholic and Reformed theology.",
    },
    DenominationSeed {
        name: "Pentecostal",
        description: "Protestant denomination emphasizing the work of the Holy Spirit, spiritual gifts, and expressive worship.",
    },
];

pub const BELIEFS: &[BeliefSeed] = &[
    // Salvation
    BeliefSeed {
        topic: "Salvation",
        denomination: "Roman Catholic",
        summary: "Salvation involves both faith and good works, and comes through the Church's sacraments. Baptism removes original sin, and sanctifying grace is infused through the sacraments.",
        scripture_references: "James 2:24, Matthew 19:16-17",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Eastern Orthodox",
        summary: "Salvation is a process of theosis (becoming like God), involving synergy between divine grace and human freedom. Sacraments are essential channels of grace.",
        scripture_references: "2 Peter 1:4, Romans 8:29-30",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Lutheran",
        summary: "Salvation is by grace alone through faith alone in Christ alone. Good works are the result of salvation, not a means to it.",
        scripture_references: "Ephesians 2:8-9, Romans 3:28",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Baptist",
        summary: "Salvation is by grace through faith alone, with emphasis on a personal conversion experience. Once saved, always saved (eternal security).",
        scripture_references: "John 3:16, Romans 10:9-10",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Methodist",
        summary: "Salvation involves prevenient grace, justification by faith, and sanctification. Salvation can be lost through willful, persistent sin.",
        scripture_references: "Philippians 2:12-13, Hebrews 6:4-6",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Presbyterian",
        summary: "Salvation is by grace alone through faith alone, with an emphasis on God's sovereignty and predestination. The elect are saved by God's unconditional choice.",
        scripture_references: "Ephesians 1:4-5, Romans 8:28-30",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Anglican/Episcopal",
        summary: "Salvation is by grace through faith, with sacraments as means of grace. Tends to balance Catholic and Protestant views.",
        scripture_references: "Ephesians 2:8-10, 1 Peter 3:21",
    },
    BeliefSeed {
        topic: "Salvation",
        denomination: "Pentecostal",
        summary: "Salvation is by grace through faith, often with emphasis on a definite conversion experience. Many also emphasize the baptism of the Holy Spirit as a subsequent experience.",
        scripture_references: "Acts 2:38, Mark 16:16",
    },
    // Baptism
    BeliefSeed {
        topic: "Baptism",
        denomination: "Roman Catholic",
        summary: "Sacrament necessary for salvation that removes original sin. Typically performed on infants by sprinkling or pouring water.",
        scripture_references: "John 3:5, Acts 2:38-39",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Eastern Orthodox",
        summary: "Essential sacrament that incorporates one into the Church. Performed by triple immersion, typically for infants.",
        scripture_references: "Romans 6:3-4, Colossians 2:12",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Lutheran",
        summary: "Sacrament that creates faith and delivers God's grace. Typically performed on infants by sprinkling, pouring, or immersion.",
        scripture_references: "Mark 16:16, 1 Peter 3:21",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Baptist",
        summary: "Ordinance (symbolic act) for believers only, performed by full immersion. Not necessary for salvation but a public profession of faith.",
        scripture_references: "Acts 8:36-38, Matthew 28:19-20",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Methodist",
        summary: "Sacrament and means of grace, typically performed on infants by sprinkling or pouring, but also for adult converts.",
        scripture_references: "Acts 16:15, Acts 16:33",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Presbyterian",
        summary: "Sign and seal of the covenant of grace, typically performed on infants of believers by sprinkling or pouring.",
        scripture_references: "Genesis 17:7, Acts 2:39",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Anglican/Episcopal",
        summary: "Sacrament of initiation into the Church, typically performed on infants by sprinkling or pouring.",
        scripture_references: "Acts 2:38-39, Titus 3:5",
    },
    BeliefSeed {
        topic: "Baptism",
        denomination: "Pentecostal",
        summary: "Ordinance for believers only, usually by immersion. Many distinguish between water baptism and baptism of the Holy Spirit.",
        scripture_references: "Acts 2:38, Acts 8:12",
    },
    // Scripture and Authority
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Roman Catholic",
        summary: "Scripture and Tradition are equal authorities. The Magisterium (teaching office of the Church) interprets both authoritatively.",
        scripture_references: "2 Thessalonians 2:15, 1 Timothy 3:15",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Eastern Orthodox",
        summary: "Scripture is interpreted within Holy Tradition, which includes the ecumenical councils, writings of Church Fathers, liturgy, and icons.",
        scripture_references: "2 Thessalonians 2:15, 2 Timothy 2:2",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Lutheran",
        summary: "Scripture alone (sola scriptura) is the ultimate authority. Tradition is valuable but subordinate to Scripture.",
        scripture_references: "2 Timothy 3:16-17, Isaiah 8:20",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Baptist",
        summary: "Scripture alone is the final authority for faith and practice. Emphasizes the individual's right to interpret Scripture guided by the Holy Spirit.",
        scripture_references: "2 Timothy 3:16-17, 2 Peter 1:20-21",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Methodist",
        summary: "Scripture is the primary authority, interpreted through tradition, reason, and experience (the Wesleyan Quadrilateral).",
        scripture_references: "2 Timothy 3:16-17, Acts 15:28",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Presbyterian",
        summary: "Scripture alone is the ultimate authority. Creeds and confessions are important subordinate standards.",
        scripture_references: "2 Timothy 3:16-17, 2 Peter 1:20-21",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Anglican/Episcopal",
        summary: "Scripture contains all things necessary for salvation. Tradition and reason help interpret Scripture (the three-legged stool).",
        scripture_references: "2 Timothy 3:16-17, John 20:31",
    },
    BeliefSeed {
        topic: "Scripture and Authority",
        denomination: "Pentecostal",
        summary: "Scripture is the inspired and authoritative Word of God. Emphasis on the Holy Spirit's ongoing revelation, though subordinate to Scripture.",
        scripture_references: "2 Timothy 3:16-17, Joel 2:28-29",
    },
    // Communion/Eucharist
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Roman Catholic",
        summary: "Transubstantiation: the bread and wine become the actual body and blood of Christ. The Mass is a sacrifice re-presenting Christ's sacrifice.",
        scripture_references: "John 6:53-58, 1 Corinthians 11:23-29",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Eastern Orthodox",
        summary: "The bread and wine truly become the body and blood of Christ through mystery. The Divine Liturgy makes present Christ's sacrifice.",
        scripture_references: "John 6:53-58, 1 Corinthians 10:16-17",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Lutheran",
        summary: "Consubstantiation or Sacramental Union: Christ is truly present in, with, and under the elements, though they remain bread and wine.",
        scripture_references: "1 Corinthians 11:23-29, Matthew 26:26-28",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Baptist",
        summary: "Memorial view: the bread and wine are symbols commemorating Christ's death. The Lord's Supper is an ordinance for believers only.",
        scripture_references: "1 Corinthians 11:24-26, Luke 22:19",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Methodist",
        summary: "Real spiritual presence: Christ is spiritually but not physically present in the elements. The Lord's Supper is a means of grace.",
        scripture_references: "1 Corinthians 10:16, 1 Corinthians 11:23-26",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Presbyterian",
        summary: "Spiritual presence: Christ is spiritually present to the faith of believers. The Lord's Supper is a sign and seal of the covenant.",
        scripture_references: "1 Corinthians 10:16, 1 Corinthians 11:23-26",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Anglican/Episcopal",
        summary: "Views range from spiritual presence to consubstantiation, but generally affirms Christ's real presence in some form.",
        scripture_references: "John 6:35-58, 1 Corinthians 11:23-26",
    },
    BeliefSeed {
        topic: "Communion/Eucharist",
        denomination: "Pentecostal",
        summary: "Typically a memorial view: the bread and wine are symbols commemorating Christ's death and proclaiming his return.",
        scripture_references: "1 Corinthians 11:24-26, Luke 22:19",
    },
];

/// Description used when the anchor denomination has to be created
pub const ANCHOR_DESCRIPTION: &str = "The foundational theological perspective that views the thousand-year reign mentioned in Revelation 20 as symbolic of Christ's current reign. Focuses on 'inaugurated eschatology' where God's kingdom is already present but not yet fully realized.";

/// Eschatology positions held by the anchor denomination
pub const ANCHOR_BELIEFS: &[BeliefSeed] = &[
    BeliefSeed {
        topic: "Eschatology (End Times)",
        denomination: "Amillennial",
        summary: "Amillennialism teaches that the thousand-year reign mentioned in Revelation 20 is symbolic, representing Christ's current reign in heaven and in the hearts of believers. The millennium is understood as the entire period between Christ's first and second comings. The church age is the fulfillment of God's kingdom promises.",
        scripture_references: "Revelation 20:1-6, John 5:28-29, 2 Peter 3:10-13",
    },
    BeliefSeed {
        topic: "Kingdom of God",
        denomination: "Amillennial",
        summary: "The Kingdom of God is already present but not yet fully realized ('already-not yet'). It was inaugurated at Christ's first coming and will be consummated at His return. The church is the current manifestation of God's kingdom on earth.",
        scripture_references: "Luke 17:20-21, Matthew 12:28, Colossians 1:13-14",
    },
    BeliefSeed {
        topic: "Israel and the Church",
        denomination: "Amillennial",
        summary: "The Church is the spiritual Israel, the fulfillment of God's promises to Abraham. The promises to ethnic Israel are ultimately fulfilled in Christ and the Church. The true Israel is not defined by ethnicity but by faith in Christ.",
        scripture_references: "Romans 9:6-8, Galatians 3:7-9, Galatians 3:29, Romans 2:28-29",
    },
    BeliefSeed {
        topic: "The Rapture",
        denomination: "Amillennial",
        summary: "There is no separate rapture apart from the second coming of Christ. Believers who are alive at Christ's return will be caught up to meet Him in the air as He descends to earth for the final judgment.",
        scripture_references: "1 Thessalonians 4:16-17, Matthew 24:31, 1 Corinthians 15:51-52",
    },
    BeliefSeed {
        topic: "The Tribulation",
        denomination: "Amillennial",
        summary: "The tribulation is not a future seven-year period, but represents the entire church age when believers face persecution. The church will endure tribulation until Christ's return.",
        scripture_references: "John 16:33, Acts 14:22, Revelation 1:9",
    },
    BeliefSeed {
        topic: "The Antichrist",
        denomination: "Amillennial",
        summary: "The Antichrist is not necessarily a single future individual, but represents all powers and persons throughout history that oppose Christ and His church. There may be a final culmination of this antichrist spirit before Christ's return.",
        scripture_references: "1 John 2:18, 2 Thessalonians 2:3-4, Revelation 13",
    },
    BeliefSeed {
        topic: "The Resurrection",
        denomination: "Amillennial",
        summary: "There will be a single bodily resurrection of all people (believers and unbelievers) at Christ's second coming, followed immediately by the final judgment.",
        scripture_references: "John 5:28-29, Acts 24:15, Revelation 20:11-15",
    },
    BeliefSeed {
        topic: "The New Heavens and New Earth",
        denomination: "Amillennial",
        summary: "After Christ's return and the final judgment, God will create a new heavens and new earth, the eternal state where believers will dwell with God forever.",
        scripture_references: "Revelation 21:1-4, 2 Peter 3:13, Isaiah 65:17",
    },
    BeliefSeed {
        topic: "Prophecy Interpretation",
        denomination: "Amillennial",
        summary: "Prophecy should be interpreted in light of its historical context, literary genre, and the progressive nature of revelation. Many Old Testament prophecies are fulfilled spiritually or typologically in Christ and the Church rather than literally with national Israel.",
        scripture_references: "Hebrews 1:1-2, 1 Peter 1:10-12, Luke 24:25-27",
    },
];

/// An apologetics category with its objections
pub struct CategorySeed {
    pub name: &'static str,
    pub description: &'static str,
    pub objections: &'static [ObjectionSeed],
}

pub struct ObjectionSeed {
    pub title: &'static str,
    pub objection_text: &'static str,
    pub source: &'static str,
    pub difficulty_level: i64,
}

/// A theological author with published works
pub struct AuthorSeed {
    pub name: &'static str,
    pub timeperiod: &'static str,
    pub tradition: &'static str,
    pub bio: &'static str,
    pub is_amillennial: bool,
    pub works: &'static [WorkSeed],
}

pub struct WorkSeed {
    pub title: &'static str,
    pub publication_year: Option<i64>,
    pub description: &'static str,
}

pub const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Eschatology",
        description: "Objections concerning the millennium, the end times and the return of Christ.",
        objections: &[
            ObjectionSeed {
                title: "Revelation 20 describes a literal thousand years",
                objection_text: "The text says 'a thousand years' six times. Reading it symbolically ignores the plain meaning of Scripture.",
                source: "Premillennial",
                difficulty_level: 3,
            },
            ObjectionSeed {
                title: "Satan does not look bound today",
                objection_text: "Evil is everywhere in the world, so Satan cannot be the bound and sealed figure of Revelation 20:1-3.",
                source: "Premillennial",
                difficulty_level: 2,
            },
            ObjectionSeed {
                title: "Two resurrections require two ages",
                objection_text: "Revelation 20 speaks of a first resurrection and the rest of the dead living after the thousand years, so the resurrections must be separated by a literal millennium.",
                source: "Premillennial",
                difficulty_level: 4,
            },
        ],
    },
    CategorySeed {
        name: "Israel and the Church",
        description: "Objections about the relationship between ethnic Israel, the promises to Abraham and the Church.",
        objections: &[
            ObjectionSeed {
                title: "Amillennialism is replacement theology",
                objection_text: "Seeing the Church as the fulfillment of Israel's promises means God has abandoned the Jewish people.",
                source: "Dispensational",
                difficulty_level: 3,
            },
            ObjectionSeed {
                title: "The land promises are unconditional",
                objection_text: "God promised the land to Abraham's descendants forever, so there must be a future earthly kingdom centred on Israel.",
                source: "Dispensational",
                difficulty_level: 4,
            },
        ],
    },
    CategorySeed {
        name: "Biblical Interpretation",
        description: "Objections about how prophecy and apocalyptic literature should be read.",
        objections: &[
            ObjectionSeed {
                title: "Symbolic reading is arbitrary",
                objection_text: "Once you read prophecy symbolically, any meaning can be found in the text.",
                source: "Literalist hermeneutics",
                difficulty_level: 2,
            },
            ObjectionSeed {
                title: "The early church was premillennial",
                objection_text: "Several second-century writers expected an earthly millennium, so amillennialism is a later development.",
                source: "Historical",
                difficulty_level: 3,
            },
        ],
    },
];

pub const AUTHORS: &[AuthorSeed] = &[
    AuthorSeed {
        name: "Augustine of Hippo",
        timeperiod: "354-430",
        tradition: "Early Church",
        bio: "Bishop of Hippo whose reading of Revelation 20 as the present age of the Church shaped Western eschatology.",
        is_amillennial: true,
        works: &[WorkSeed {
            title: "The City of God",
            publication_year: Some(426),
            description: "Contrasts the earthly and heavenly cities; Book XX treats the thousand years as the era of the Church.",
        }],
    },
    AuthorSeed {
        name: "Anthony A. Hoekema",
        timeperiod: "1913-1988",
        tradition: "Reformed",
        bio: "Professor of systematic theology at Calvin Theological Seminary.",
        is_amillennial: true,
        works: &[WorkSeed {
            title: "The Bible and the Future",
            publication_year: Some(1979),
            description: "A full treatment of biblical eschatology from an amillennial perspective.",
        }],
    },
    AuthorSeed {
        name: "Jay Adams",
        timeperiod: "1929-2020",
        tradition: "Reformed",
        bio: "Pastor, author and founder of the nouthetic counseling movement.",
        is_amillennial: true,
        works: &[WorkSeed {
            title: "The Time Is at Hand",
            publication_year: Some(1966),
            description: "An amillennial commentary on the Book of Revelation.",
        }],
    },
    AuthorSeed {
        name: "Kim Riddlebarger",
        timeperiod: "1954-",
        tradition: "Reformed",
        bio: "Pastor and co-host of the White Horse Inn.",
        is_amillennial: true,
        works: &[WorkSeed {
            title: "A Case for Amillennialism",
            publication_year: Some(2003),
            description: "A defense of amillennialism that answers common objections.",
        }],
    },
    AuthorSeed {
        name: "Sam Storms",
        timeperiod: "1951-",
        tradition: "Reformed Charismatic",
        bio: "Pastor and author who moved from premillennialism to amillennialism.",
        is_amillennial: true,
        works: &[WorkSeed {
            title: "Kingdom Come: The Amillennial Alternative",
            publication_year: Some(2013),
            description: "An examination of amillennial eschatology with a critique of premillennialism.",
        }],
    },
];
