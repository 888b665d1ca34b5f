//! The Chaplet of St. Michael as immutable reference data.
//!
//! Fifty-three prayers in fixed order: opening versicle, Glory Be,
//! nine salutations to the angelic choirs (each followed by one Our
//! Father and three Hail Marys), four Our Fathers in honor of the
//! three archangels and the guardian angel, the closing prayer, and
//! the final invocation.
//!
//! Built once at startup, then shared read-only. Construction is
//! deterministic and side-effect-free.

/// A concrete prayer language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Latin,
    English,
}

/// Language selection policy for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageMode {
    Latin,
    English,
    /// Alternate deterministically by catalog index: even entries in
    /// Latin, odd in English. Pure function of the index, so the same
    /// entry is keyed in the same language across cycles and restarts.
    Alternating,
}

impl LanguageMode {
    /// Resolve the language for the entry at `index`.
    #[inline]
    pub fn resolve(self, index: usize) -> Language {
        match self {
            LanguageMode::Latin => Language::Latin,
            LanguageMode::English => Language::English,
            LanguageMode::Alternating => {
                if index % 2 == 0 {
                    Language::Latin
                } else {
                    Language::English
                }
            }
        }
    }
}

/// Position a prayer occupies in the chaplet structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Opening,
    GloryBe,
    Salutation,
    OurFather,
    HailMary,
    ClosingOurFather,
    ClosingPrayer,
    FinalInvocation,
}

/// One prayer with its text in both languages.
#[derive(Clone, Copy, Debug)]
pub struct PrayerEntry {
    pub id: &'static str,
    pub role: Role,
    /// Human-readable annotation for logs: the choir name for a
    /// salutation, the dedicatee for a closing Our Father.
    pub title: &'static str,
    latin: &'static str,
    english: &'static str,
}

impl PrayerEntry {
    /// Prayer text in the given language.
    #[inline]
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Latin => self.latin,
            Language::English => self.english,
        }
    }
}

/// Number of entries in the full chaplet.
pub const CHAPLET_LEN: usize = 53;

/// The nine choirs in descending order: title, Latin, English.
const SALUTATIONS: [(&str, &str, &str); 9] = [
    (
        "Seraphim",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Séraphim cœléstis, \
         Dóminus nos dignos effíciat incéndi igne caritátis perféctæ. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Seraphim, \
         may the Lord make us worthy to burn with the fire of perfect charity. Amen.",
    ),
    (
        "Cherubim",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Chérubim cœléstis, \
         Dóminus nobis grátiam relínquere vias peccáti det et in vias \
         perfectiónis Christiánæ decúrrere. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Cherubim, \
         may the Lord vouchsafe to grant us grace to leave the ways of wickedness \
         to run in the paths of Christian perfection. Amen.",
    ),
    (
        "Thrones",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Thronórum cœléstis, \
         infúndat Dóminus córdibus nostris spíritum humilitátis verum sincerúmque. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Thrones, \
         may the Lord infuse into our hearts a true and sincere spirit of humility. Amen.",
    ),
    (
        "Dominations",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Dominatiónum cœléstis, \
         Dóminus nobis grátiam det sensus gubernáre et carnem petulántem superáre. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Dominations, \
         may the Lord give us grace to govern our senses and subdue our unruly passions. Amen.",
    ),
    (
        "Virtues",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Virtútum cœléstis, \
         Dóminus nos a malo et cadéndo in tentatiónem consérvet. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Virtues, \
         may the Lord preserve us from evil and suffer us not to fall into temptation. Amen.",
    ),
    (
        "Powers",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Potestátum cœléstis, \
         Dóminus ánimas nostras contra insídias et tentatiónes diáboli deféndat. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Powers, \
         may the Lord vouchsafe to protect our souls against the snares and temptations \
         of the devil. Amen.",
    ),
    (
        "Principalities",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Principatórum cœléstis, \
         Dóminus ánimas nostras spíritu vero obœdiéntiæ ímpleat. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Principalities, \
         may God fill our souls with a true spirit of obedience. Amen.",
    ),
    (
        "Archangels",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Archangelórum cœléstis, \
         Dóminus nobis constántiam in fide et óminibus opéribus bonis det, \
         ut glóriam paradísi obtineámus. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Archangels, \
         may the Lord give us perseverance in faith and in all good works, \
         in order that we gain the glory of Paradise. Amen.",
    ),
    (
        "Angels",
        "Per intercessiónem Sancti Michaëlis et cappéllæ Angelórum cœléstis, \
         Dóminus nos ab eis in hac vita mortále conservári det \
         et in vitam futúram perdúci. Amen.",
        "By the intercession of Saint Michael and the celestial Choir of Angels, \
         may the Lord grant us to be protected by them in this mortal life \
         and conducted hereafter to eternal glory. Amen.",
    ),
];

const OPENING_LATIN: &str =
    "Deus, in adiutórium meum inténde. Dómine, ad adiuvándum me festína.";
const OPENING_ENGLISH: &str =
    "O God, come to my assistance. O Lord, make haste to help me.";

const GLORY_BE_LATIN: &str =
    "Glória Patri, et Fílio, et Spirítui Sancto. \
     Sicut erat in princípio, et nunc, et semper, \
     et in sǽcula sæculórum. Amen.";
const GLORY_BE_ENGLISH: &str =
    "Glory be to the Father, and to the Son, and to the Holy Spirit. \
     As it was in the beginning, is now, and ever shall be, \
     world without end. Amen.";

const OUR_FATHER_LATIN: &str =
    "Pater noster, qui es in cælis, sanctificétur nomen tuum. \
     Advéniat regnum tuum. Fiat volúntas tua, sicut in cælo et in terra. \
     Panem nostrum quotidiánum da nobis hódie. \
     Et dimítte nobis débita nostra, sicut et nos dimíttimus debitóribus nostris. \
     Et ne nos indúcas in tentatiónem, sed líbera nos a malo. Amen.";
const OUR_FATHER_ENGLISH: &str =
    "Our Father, who art in heaven, hallowed be thy name. \
     Thy kingdom come, thy will be done, on earth as it is in heaven. \
     Give us this day our daily bread, and forgive us our trespasses, \
     as we forgive those who trespass against us. \
     And lead us not into temptation, but deliver us from evil. Amen.";

const HAIL_MARY_LATIN: &str =
    "Ave María, grátia plena, Dóminus tecum. \
     Benedícta tu in muliéribus, et benedíctus fructus ventris tui, Iesus. \
     Sancta María, Mater Dei, ora pro nobis peccatóribus, \
     nunc et in hora mortis nostræ. Amen.";
const HAIL_MARY_ENGLISH: &str =
    "Hail Mary, full of grace, the Lord is with thee. \
     Blessed art thou among women, and blessed is the fruit of thy womb, Jesus. \
     Holy Mary, Mother of God, pray for us sinners, \
     now and at the hour of our death. Amen.";

/// Dedicatees of the four closing Our Fathers.
const CLOSING_DEDICATIONS: [(&str, &str); 4] = [
    ("our-father-st-michael", "Saint Michael"),
    ("our-father-st-gabriel", "Saint Gabriel"),
    ("our-father-st-raphael", "Saint Raphael"),
    ("our-father-guardian-angel", "Our Guardian Angel"),
];

const CLOSING_PRAYER_LATIN: &str =
    "O Princeps glorióse sancte Míchaël, dux et præpósite cœléstium exercítuum, \
     custos animárum, dómitor spirítuum rebéllum, serve in domo divíni Regis, \
     et noster condúctor mirábilis, qui cum excelléntia et virtúte cœlésti fulges, \
     líbera nos a malo, qui ad te cum confidéntia convértimus, \
     et nos propítio præsídio tuo fac, quotídie Deum magis fidéliter sevíre. \
     Ora pro nobis, O glorióse Sancte Míchaël, princeps ecclésiæ Jesu Christi, \
     ut digni efficiámur promissiónibus eius.";
const CLOSING_PRAYER_ENGLISH: &str =
    "O glorious Prince Saint Michael, chief and commander of the heavenly hosts, \
     guardian of souls, vanquisher of rebel spirits, servant in the house of the Divine King, \
     and our admirable conductor, thou who dost shine with excellence and superhuman virtue, \
     vouchsafe to deliver us from all evil, who turn to thee with confidence, \
     and enable us by thy gracious protection to serve God more and more faithfully every day. \
     Pray for us, O glorious Saint Michael, Prince of the Church of Jesus Christ, \
     that we may be made worthy of His promises.";

const FINAL_INVOCATION_LATIN: &str =
    "Quis ut Deus? Quis résistet Michaëlis gladió?";
const FINAL_INVOCATION_ENGLISH: &str =
    "Who is like unto God? Who can withstand the sword of Saint Michael?";

/// Per-salutation prayer ids, indexed by salutation number. Kept as
/// literals so every entry id stays `&'static str`.
const SALUTATION_IDS: [&str; 9] = [
    "salutation-1-seraphim",
    "salutation-2-cherubim",
    "salutation-3-thrones",
    "salutation-4-dominations",
    "salutation-5-virtues",
    "salutation-6-powers",
    "salutation-7-principalities",
    "salutation-8-archangels",
    "salutation-9-angels",
];
const DECADE_OUR_FATHER_IDS: [&str; 9] = [
    "our-father-1", "our-father-2", "our-father-3",
    "our-father-4", "our-father-5", "our-father-6",
    "our-father-7", "our-father-8", "our-father-9",
];
const HAIL_MARY_IDS: [[&str; 3]; 9] = [
    ["hail-mary-1-1", "hail-mary-1-2", "hail-mary-1-3"],
    ["hail-mary-2-1", "hail-mary-2-2", "hail-mary-2-3"],
    ["hail-mary-3-1", "hail-mary-3-2", "hail-mary-3-3"],
    ["hail-mary-4-1", "hail-mary-4-2", "hail-mary-4-3"],
    ["hail-mary-5-1", "hail-mary-5-2", "hail-mary-5-3"],
    ["hail-mary-6-1", "hail-mary-6-2", "hail-mary-6-3"],
    ["hail-mary-7-1", "hail-mary-7-2", "hail-mary-7-3"],
    ["hail-mary-8-1", "hail-mary-8-2", "hail-mary-8-3"],
    ["hail-mary-9-1", "hail-mary-9-2", "hail-mary-9-3"],
];

/// The full chaplet, in its fixed order.
#[derive(Debug)]
pub struct Chaplet {
    entries: Vec<PrayerEntry>,
}

impl Chaplet {
    /// Construct the 53-entry structure. Deterministic; the result is
    /// reference data for the rest of the process.
    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(CHAPLET_LEN);

        entries.push(PrayerEntry {
            id: "opening",
            role: Role::Opening,
            title: "Opening",
            latin: OPENING_LATIN,
            english: OPENING_ENGLISH,
        });
        entries.push(PrayerEntry {
            id: "glory-be",
            role: Role::GloryBe,
            title: "Glory Be",
            latin: GLORY_BE_LATIN,
            english: GLORY_BE_ENGLISH,
        });

        for (i, &(choir, latin, english)) in SALUTATIONS.iter().enumerate() {
            entries.push(PrayerEntry {
                id: SALUTATION_IDS[i],
                role: Role::Salutation,
                title: choir,
                latin,
                english,
            });
            entries.push(PrayerEntry {
                id: DECADE_OUR_FATHER_IDS[i],
                role: Role::OurFather,
                title: "Our Father",
                latin: OUR_FATHER_LATIN,
                english: OUR_FATHER_ENGLISH,
            });
            for id in HAIL_MARY_IDS[i] {
                entries.push(PrayerEntry {
                    id,
                    role: Role::HailMary,
                    title: "Hail Mary",
                    latin: HAIL_MARY_LATIN,
                    english: HAIL_MARY_ENGLISH,
                });
            }
        }

        for (id, dedicatee) in CLOSING_DEDICATIONS {
            entries.push(PrayerEntry {
                id,
                role: Role::ClosingOurFather,
                title: dedicatee,
                latin: OUR_FATHER_LATIN,
                english: OUR_FATHER_ENGLISH,
            });
        }

        entries.push(PrayerEntry {
            id: "closing-prayer",
            role: Role::ClosingPrayer,
            title: "Closing Prayer",
            latin: CLOSING_PRAYER_LATIN,
            english: CLOSING_PRAYER_ENGLISH,
        });
        entries.push(PrayerEntry {
            id: "final-invocation",
            role: Role::FinalInvocation,
            title: "Final Invocation",
            latin: FINAL_INVOCATION_LATIN,
            english: FINAL_INVOCATION_ENGLISH,
        });

        debug_assert_eq!(entries.len(), CHAPLET_LEN);
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[PrayerEntry] {
        &self.entries
    }
}
