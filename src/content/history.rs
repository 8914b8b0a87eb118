// =============================================================================
// HISTORY — Michel l'Archange vs Michel-Ange : qui a nommé qui ?
// =============================================================================
//
// Idée reçue : "l'Archange Michel doit son nom aux peintures de Michel-Ange".
// Réalité : c'est l'INVERSE. L'archange apparaît dans des textes antérieurs
// de plus de 1 600 ans à la naissance de l'artiste (1475).
//
// =============================================================================

/// Textes anciens mentionnant l'Archange Michel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReligiousText {
    HebrewBible,
    NewTestament,
    Quran,
    BookOfEnoch,
}

impl ReligiousText {
    pub const ALL: [ReligiousText; 4] = [
        ReligiousText::HebrewBible,
        ReligiousText::NewTestament,
        ReligiousText::Quran,
        ReligiousText::BookOfEnoch,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ReligiousText::HebrewBible => "Hebrew Bible (Book of Daniel, ~164 BCE)",
            ReligiousText::NewTestament => {
                "New Testament (Epistle of Jude, Book of Revelation, ~1st century CE)"
            }
            ReligiousText::Quran => "Quran (Surah 2:98, ~7th century CE)",
            ReligiousText::BookOfEnoch => "Book of Enoch (~3rd century BCE)",
        }
    }
}

/// Une figure historique replacée dans son époque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalFigure {
    pub name: String,
    pub time_period: String,
    pub description: String,
    pub significance: String,
}

impl HistoricalFigure {
    fn new(name: &str, time_period: &str, description: &str, significance: &str) -> Self {
        HistoricalFigure {
            name: name.to_string(),
            time_period: time_period.to_string(),
            description: description.to_string(),
            significance: significance.to_string(),
        }
    }
}

pub fn archangel_michael() -> HistoricalFigure {
    HistoricalFigure::new(
        "Archangel Michael",
        "Ancient texts (3rd century BCE - 1st century CE and earlier)",
        "Chief of the archangels in Jewish, Christian, and Islamic theology",
        "Warrior angel, protector of Israel, defeater of Satan, weigher of souls",
    )
}

pub fn michelangelo() -> HistoricalFigure {
    HistoricalFigure::new(
        "Michelangelo di Lodovico Buonarroti Simoni",
        "Renaissance (1475-1564 CE)",
        "Italian sculptor, painter, architect, and poet",
        "Created iconic works including the Sistine Chapel ceiling and 'David' sculpture",
    )
}

pub fn naming_relationship() -> &'static str {
    "\
HISTORICAL CLARIFICATION: Archangel Michael vs. Michelangelo
================================================================

COMMON MISCONCEPTION:
---------------------
\"Was Archangel Michael named after Michelangelo's paintings?\"

HISTORICAL REALITY:
-------------------
No. The naming relationship is actually the OPPOSITE:

1. ARCHANGEL MICHAEL (Ancient Origin):
   • First mentioned in Hebrew Bible (Book of Daniel, ~164 BCE)
   • Appears in New Testament (1st century CE)
   • Referenced in Quran (7th century CE)
   • Name means \"Who is like God?\" in Hebrew (Mi-ka-el)

2. MICHELANGELO BUONARROTI (Renaissance Artist):
   • Born: March 6, 1475 CE (over 1,600 years AFTER biblical texts)
   • Full name: Michelangelo di Lodovico Buonarroti Simoni
   • Name \"Michelangelo\" = \"Michael the Angel\" in Italian
   • Named AFTER the Archangel Michael, following Christian tradition

TIMELINE:
---------
3rd century BCE: Book of Enoch mentions Michael
2nd century BCE: Book of Daniel describes Michael as protector
1st century CE:  New Testament (Jude, Revelation) references Michael
7th century CE:  Quran mentions Archangel Michael (Mīkāl)
1475 CE:         Michelangelo Buonarroti born (named after the archangel)
1508-1512 CE:    Michelangelo paints Sistine Chapel ceiling

SISTINE CHAPEL CONNECTION:
---------------------------
• The Sistine Chapel has an ARCHED (vaulted) ceiling
• Michelangelo painted it with biblical scenes (1508-1512)
• The confusion may arise from:
  - \"Arc\" sounds like \"Arch\" (architectural feature)
  - \"Angle\" sounds like \"Angel\"
  - Both Michelangelo and Archangel Michael share the name \"Michael\"

CONCLUSION:
-----------
Archangel Michael (ancient theological figure) existed in religious
texts over 1,600 years before Michelangelo (the artist) was born.
The artist was named after the archangel, following the Christian
tradition of naming children after saints and biblical figures."
}

pub fn ancient_references() -> Vec<&'static str> {
    vec![
        "Book of Daniel 10:13 - 'Michael, one of the chief princes'",
        "Book of Daniel 12:1 - 'Michael, the great prince who protects your people'",
        "Book of Enoch 20:5 - 'Michael, one of the holy angels'",
        "Epistle of Jude 1:9 - 'Michael the archangel...disputed with the devil'",
        "Book of Revelation 12:7 - 'Michael and his angels fought against the dragon'",
        "Quran 2:98 - 'Michael (Mīkāl) is among the angels'",
        "1 Thessalonians 4:16 - 'The Lord himself shall descend...with the voice of the archangel'",
    ]
}

pub fn michelangelo_angel_works() -> Vec<&'static str> {
    vec![
        "Sistine Chapel Ceiling (1508-1512) - Various angels in biblical scenes",
        "The Last Judgment (1536-1541) - Angels with trumpets",
        "Manchester Madonna (c. 1497) - Angels in attendance",
        "Doni Tondo (c. 1507) - Angels in background",
        "Tomb of Pope Julius II - Angels as decorative elements",
    ]
}

/// Les trois lignes de conclusion de la démonstration.
pub fn summary() -> [&'static str; 3] {
    [
        "SUMMARY: Michelangelo (the artist) was named AFTER Archangel Michael,",
        "         not the other way around. The archangel predates the artist",
        "         by over 1,600 years!",
    ]
}
