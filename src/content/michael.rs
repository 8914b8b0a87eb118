// =============================================================================
// MICHAEL — L'Archange Michel : rôles, iconographie, traditions
// =============================================================================
//
// Michel (מִיכָאֵל, "Qui est comme Dieu ?") vu sous deux angles :
//   - THÉOLOGIQUE : guerrier divin, psychopompe, protecteur d'Israël...
//   - ARTISTIQUE  : l'épée, le dragon, la balance des âmes, Michel-Ange
//
// Chaque rôle théologique est associé à UNE représentation artistique
// (TheologicalAttribute.artistic_representation).
//
// =============================================================================

use std::fmt;

/// Les rôles de Michel dans la tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MichaelRole {
    DivineWarrior,
    Psychopomp,
    DragonSlayer,
    HeavenlyPrince,
    WeigherOfSouls,
    Healer,
}

impl MichaelRole {
    pub const ALL: [MichaelRole; 6] = [
        MichaelRole::DivineWarrior,
        MichaelRole::Psychopomp,
        MichaelRole::DragonSlayer,
        MichaelRole::HeavenlyPrince,
        MichaelRole::WeigherOfSouls,
        MichaelRole::Healer,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            MichaelRole::DivineWarrior => "Divine warrior and protector",
            MichaelRole::Psychopomp => "Guide of souls to the afterlife",
            MichaelRole::DragonSlayer => "Defeater of Satan and evil forces",
            MichaelRole::HeavenlyPrince => "Prince of the heavenly host",
            MichaelRole::WeigherOfSouls => "Judge who weighs souls at judgment",
            MichaelRole::Healer => "Healing angel in Jewish tradition",
        }
    }
}

/// Les façons de représenter Michel dans l'art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtisticDepiction {
    WarriorWithSword,
    DragonVictor,
    ScalesOfJustice,
    ArmoredGuardian,
    YouthfulHero,
}

impl ArtisticDepiction {
    pub const ALL: [ArtisticDepiction; 5] = [
        ArtisticDepiction::WarriorWithSword,
        ArtisticDepiction::DragonVictor,
        ArtisticDepiction::ScalesOfJustice,
        ArtisticDepiction::ArmoredGuardian,
        ArtisticDepiction::YouthfulHero,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ArtisticDepiction::WarriorWithSword => "Armed warrior with flaming sword",
            ArtisticDepiction::DragonVictor => "Standing victorious over dragon/serpent",
            ArtisticDepiction::ScalesOfJustice => "Holding scales weighing souls",
            ArtisticDepiction::ArmoredGuardian => "Fully armored celestial guardian",
            ArtisticDepiction::YouthfulHero => "Idealized youthful figure (Renaissance)",
        }
    }
}

impl fmt::Display for ArtisticDepiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Un attribut théologique de Michel, avec son pendant iconographique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheologicalAttribute {
    pub name: String,
    pub tradition: String,
    pub description: String,
    pub symbolic_meaning: String,
    pub artistic_representation: ArtisticDepiction,
}

impl TheologicalAttribute {
    fn new(
        name: &str,
        tradition: &str,
        description: &str,
        symbolic_meaning: &str,
        artistic_representation: ArtisticDepiction,
    ) -> Self {
        TheologicalAttribute {
            name: name.to_string(),
            tradition: tradition.to_string(),
            description: description.to_string(),
            symbolic_meaning: symbolic_meaning.to_string(),
            artistic_representation,
        }
    }
}

pub fn name_etymology() -> &'static str {
    "\
MICHAEL (מִיכָאֵל - Mikha'el)
================================

Etymology: Hebrew - \"Who is like God?\" or \"Who is like El?\"

Components:
• Mi (מִי) = \"who\"
• Kha (כָ) = \"like\" or \"as\"
• El (אֵל) = \"God\"

The name itself is a rhetorical question asserting that nothing
is comparable to God. This name embodies Michael's role as God's
champion and defender of divine supremacy against prideful rebellion.

The name contrasts with:
• Lucifer's pride: \"I will be like the Most High\"
• Michael's humility: \"Who is like God?\" (implying: no one)"
}

/// Références bibliques : (référence, description).
pub fn biblical_references() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Daniel 10:13", "Michael as 'one of the chief princes' helping Daniel"),
        ("Daniel 10:21", "Michael described as 'your prince' (Israel's protector)"),
        ("Daniel 12:1", "Michael as the great prince who protects Daniel's people"),
        ("Jude 1:9", "Michael the archangel disputes with the devil over Moses' body"),
        ("Revelation 12:7-9", "Michael and his angels fight the dragon (Satan)"),
    ]
}

pub fn theological_roles() -> Vec<TheologicalAttribute> {
    vec![
        TheologicalAttribute::new(
            "Divine Warrior",
            "Christian/Jewish",
            "Commander of the heavenly armies against evil",
            "Divine justice and protection against spiritual warfare",
            ArtisticDepiction::WarriorWithSword,
        ),
        TheologicalAttribute::new(
            "Dragon Slayer",
            "Christian (Revelation)",
            "Defeats the dragon (Satan) and casts him from heaven",
            "Victory of good over evil, light over darkness",
            ArtisticDepiction::DragonVictor,
        ),
        TheologicalAttribute::new(
            "Psychopomp",
            "Catholic/Orthodox",
            "Guides and protects souls on their journey to heaven",
            "Mediation between earthly and heavenly realms",
            ArtisticDepiction::ScalesOfJustice,
        ),
        TheologicalAttribute::new(
            "Protector of Israel",
            "Jewish",
            "Special guardian and advocate for the people of Israel",
            "Divine providence and national protection",
            ArtisticDepiction::ArmoredGuardian,
        ),
    ]
}

pub fn michelangelo_connection() -> &'static str {
    "\
ARCHANGEL MICHAEL & MICHELANGELO: ARTISTIC-THEOLOGICAL SYNTHESIS
================================================================

The Renaissance master Michelangelo Buonarroti (1475-1564) shared more
than just a name with the Archangel. His artistic vision embodied many
of the same qualities attributed to Michael:

NAME CONNECTION:
---------------
• Michelangelo = \"Michael Angel\" (Michele + Angelo in Italian)
• The artist's name literally means \"Archangel Michael\"
• This nominal connection influenced his artistic identity

SHARED ATTRIBUTES:
-----------------
1. Divine Strength
   • Michael: Warrior strength against evil
   • Michelangelo: Sculptural depiction of human physical power
   • Both express divine power made manifest

2. Judgment and Justice
   • Michael: Weighs souls at the Last Judgment
   • Michelangelo: The Last Judgment fresco (Sistine Chapel)
   • Both concerned with divine justice and human accountability

3. Victory Over Darkness
   • Michael: Defeats the dragon/Satan
   • Michelangelo: Light, shadow, and dramatic revelation in art
   • Both illuminate truth against darkness

4. Mediation Between Realms
   • Michael: Bridge between heaven and earth
   • Michelangelo: Art as bridge between divine and human
   • Both function as intermediaries of divine truth

ARTISTIC REPRESENTATIONS:
------------------------
While Michelangelo didn't extensively depict Archangel Michael directly,
his artistic philosophy embodied Michaelic themes:

• Physical perfection as reflection of divine order
• Heroic struggle against limitation and sin
• The terribilità (awesome power) in his figures
• Divine judgment and human destiny

The Sistine Chapel's Last Judgment (1536-1541) features Christ as judge
in a pose reminiscent of Michael the weigher of souls, surrounded by
angels executing divine justice.

THEOLOGICAL IMPLICATION:
-----------------------
The artist-archangel connection suggests that human creativity,
especially in service of depicting divine truth, participates in
the angelic ministry of revealing and defending divine glory."
}

pub fn cross_tradition_comparison() -> &'static str {
    "\
ARCHANGEL MICHAEL ACROSS TRADITIONS
===================================

JUDAISM:
--------
• High priest of the heavenly sanctuary
• Advocate for Israel before God
• Will stand up for Israel at the end of days (Daniel 12:1)
• Associated with the attribute of Chesed (mercy/loving-kindness)

CHRISTIANITY:
------------
• Leader of God's army against Satan
• Protector of the Church (replacing protection of Israel)
• Weigher of souls at individual judgment
• Patron saint of warriors, police, and paramedics
• Feast day: September 29 (Michaelmas)

ISLAM:
------
• Mīkāʾīl (ميكائيل) - one of the four archangels
• Provides nourishment for bodies and souls
• Controls natural phenomena
• Less martial than Christian/Jewish traditions
• Associated with mercy rather than judgment

EASTERN ORTHODOX:
----------------
• Archistrategos (Supreme Commander of Heavenly Hosts)
• Called \"Taxiarch\" (commander of the angels)
• Special veneration with monthly commemoration
• Protector of the Orthodox Church

COMMON THEMES:
-------------
1. Divine authority and power
2. Protection of the faithful
3. Opposition to evil forces
4. Mediation between divine and human realms
5. Association with judgment or mercy"
}

pub fn warrior_archetype() -> &'static str {
    "\
THE DIVINE WARRIOR ARCHETYPE
============================

Archangel Michael embodies the universal archetype of the divine warrior,
a figure that appears across world mythologies and religions:

ARCHETYPAL ELEMENTS:
-------------------
1. Sacred Violence
   • Violence in service of cosmic order
   • Destruction of chaos and evil
   • Not aggression but restoration of peace

2. Cosmic Dualism
   • Clear distinction between good and evil
   • Battle between light and darkness
   • Ultimate victory of divine order

3. Protective Function
   • Guardian of the innocent
   • Defender of the righteous community
   • Shield against spiritual harm

4. Heavenly Authority
   • Commands by divine mandate
   • Acts as God's instrument
   • Executes divine justice

PSYCHOLOGICAL DIMENSION:
-----------------------
In Jungian terms, Michael represents:

• The Self: Integrated wholeness defeating ego-driven shadow
• The Hero: Courageous confrontation with darkness
• The Logos: Masculine principle of order and discrimination

MODERN RELEVANCE:
----------------
Michael's warrior aspect speaks to:

• Spiritual warfare: Internal struggle against vices
• Moral courage: Standing for truth despite opposition
• Protective love: Defending the vulnerable
• Justice: Confronting systemic evil

The image of Michael defeating the dragon remains potent because
it symbolizes the eternal human struggle to overcome chaos, both
internal (psychological) and external (social/spiritual)."
}

pub fn theological_significance() -> &'static str {
    "\
THEOLOGICAL SIGNIFICANCE OF ARCHANGEL MICHAEL
============================================

1. CHRISTOLOGICAL PARALLEL:
--------------------------
Michael's role parallels Christ in several ways:

• Both defeat Satan (Michael in Revelation 12, Christ in broader narrative)
• Both serve as advocate/intercessor
• Both associated with final judgment
• Michael as \"type\" pointing to Christ the true victor

However, Michael remains creature, not Creator - a crucial distinction
maintained in orthodox theology.

2. ANGELOLOGY AND HIERARCHY:
---------------------------
Michael's position as archangel reveals:

• Ordered cosmos: Heaven has structure and hierarchy
• Mediated sovereignty: God rules through appointed agents
• Creaturely participation: Angels serve God's purposes
• Community of heaven: The saints are not alone

3. ESCHATOLOGICAL HOPE:
----------------------
Michael's future role (Daniel 12:1, Revelation 12) signifies:

• Final victory is assured
• Evil will be definitively defeated
• God's people will be protected through tribulation
• Cosmic restoration, not mere spiritual redemption

4. LITURGICAL PRESENCE:
----------------------
Invocation of Michael in liturgy:

• Connects earthly worship to heavenly worship
• Acknowledges angelic participation in liturgy
• Seeks angelic protection and intercession
• Maintains awareness of spiritual warfare

5. CULTURAL IMPACT:
------------------
Michael's influence extends beyond strictly religious contexts:

• Military patron: Armies throughout history
• National symbol: France, Germany, Ukraine, others
• Artistic inspiration: Countless depictions in art
• Ethical exemplar: Courage, loyalty, justice

SYNTHESIS:
---------
Archangel Michael represents the convergence of power and service,
strength and obedience, justice and mercy. His figure demonstrates
that true authority comes not from self-assertion but from alignment
with the divine will - a lesson both theological and existential."
}
