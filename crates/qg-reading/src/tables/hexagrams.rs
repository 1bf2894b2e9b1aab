//! The 64 hexagrams in King Wen order.

use std::collections::BTreeMap;

use qg_oracle::{BinaryKey, Trigram};
use serde::{Deserialize, Serialize};

use Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// Descriptive record for one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    /// King Wen number, 1-64; 0 for the unknown record.
    pub number: u8,
    /// English name.
    pub english: String,
    /// Chinese name.
    pub chinese: String,
    /// Short judgment text.
    pub judgment: String,
    /// Five-phase element of the upper trigram.
    pub element: String,
}

impl HexagramRecord {
    /// Fallback for keys missing from the table.
    pub fn unknown() -> Self {
        Self {
            number: 0,
            english: "Unknown".to_string(),
            chinese: "?".to_string(),
            judgment: "No data available.".to_string(),
            element: "Unknown".to_string(),
        }
    }
}

/// Hexagram records keyed by binary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramTable {
    /// Records keyed by six-bit key, top line first.
    pub hexagrams: BTreeMap<String, HexagramRecord>,
}

/// Five-phase element of a trigram.
pub fn trigram_element(trigram: Trigram) -> &'static str {
    match trigram {
        Heaven | Lake => "Metal",
        Fire => "Fire",
        Thunder | Wind => "Wood",
        Water => "Water",
        Mountain | Earth => "Earth",
    }
}

type KingWen = (Trigram, Trigram, &'static str, &'static str, &'static str);

// (upper, lower, english, chinese, judgment)
const KING_WEN: [KingWen; 64] = [
    (Heaven, Heaven, "The Creative", "乾 Qián", "Sublime success, furthering through perseverance."),
    (Earth, Earth, "The Receptive", "坤 Kūn", "Success through the perseverance of a mare; follow, do not lead."),
    (Water, Thunder, "Difficulty at the Beginning", "屯 Zhūn", "Persevere and appoint helpers; do not rush ahead."),
    (Mountain, Water, "Youthful Folly", "蒙 Méng", "The young fool seeks the master; ask once, with sincerity."),
    (Water, Heaven, "Waiting", "需 Xū", "Sincerity brings light and success; it furthers one to cross the great water."),
    (Heaven, Water, "Conflict", "訟 Sòng", "Halting halfway brings good fortune; going through to the end brings misfortune."),
    (Earth, Water, "The Army", "師 Shī", "The army needs perseverance and a strong, experienced leader."),
    (Water, Earth, "Holding Together", "比 Bǐ", "Holding together brings good fortune; late comers meet misfortune."),
    (Wind, Heaven, "The Taming Power of the Small", "小畜 Xiǎo Chù", "Dense clouds, no rain yet; small restraints prepare success."),
    (Heaven, Lake, "Treading", "履 Lǚ", "Treading on the tail of the tiger without being bitten."),
    (Earth, Heaven, "Peace", "泰 Tài", "The small departs, the great approaches; good fortune and success."),
    (Heaven, Earth, "Standstill", "否 Pǐ", "Heaven and earth do not unite; the superior one withdraws."),
    (Heaven, Fire, "Fellowship with Men", "同人 Tóng Rén", "Fellowship in the open succeeds; cross the great water."),
    (Fire, Heaven, "Possession in Great Measure", "大有 Dà Yǒu", "Supreme success through clarity and strength."),
    (Earth, Mountain, "Modesty", "謙 Qiān", "Modesty creates success; the superior one carries things through."),
    (Thunder, Earth, "Enthusiasm", "豫 Yù", "It furthers one to install helpers and to set armies marching."),
    (Lake, Thunder, "Following", "隨 Suí", "Following has supreme success; perseverance furthers."),
    (Mountain, Wind, "Work on What Has Been Spoiled", "蠱 Gǔ", "Repair what was spoiled; consider before and after the start."),
    (Earth, Lake, "Approach", "臨 Lín", "Approach brings success, but in the eighth month misfortune comes."),
    (Wind, Earth, "Contemplation", "觀 Guān", "The ablution is made but not the offering; trust inspires."),
    (Fire, Thunder, "Biting Through", "噬嗑 Shì Kè", "It furthers one to let justice be administered."),
    (Mountain, Fire, "Grace", "賁 Bì", "Grace brings success in small matters."),
    (Mountain, Earth, "Splitting Apart", "剝 Bō", "It does not further one to go anywhere."),
    (Earth, Thunder, "Return", "復 Fù", "The turning point; going out and coming in without error."),
    (Heaven, Thunder, "Innocence", "無妄 Wú Wàng", "Supreme success through innocence; do not act with ulterior motive."),
    (Mountain, Heaven, "The Taming Power of the Great", "大畜 Dà Chù", "Perseverance furthers; not eating at home brings good fortune."),
    (Mountain, Thunder, "The Corners of the Mouth", "頤 Yí", "Pay heed to the providing of nourishment."),
    (Lake, Wind, "Preponderance of the Great", "大過 Dà Guò", "The ridgepole sags to the breaking point; have somewhere to go."),
    (Water, Water, "The Abysmal", "坎 Kǎn", "Repeated danger; sincerity in the heart brings success."),
    (Fire, Fire, "The Clinging", "離 Lí", "Care of the cow brings good fortune; clarity depends on what it clings to."),
    (Lake, Mountain, "Influence", "咸 Xián", "Influence brings success; to take a maiden to wife brings good fortune."),
    (Thunder, Wind, "Duration", "恆 Héng", "Duration succeeds without blame; perseverance furthers."),
    (Heaven, Mountain, "Retreat", "遯 Dùn", "Retreat brings success; in what is small, perseverance furthers."),
    (Thunder, Heaven, "The Power of the Great", "大壯 Dà Zhuàng", "Perseverance furthers; great power must be rightly used."),
    (Fire, Earth, "Progress", "晉 Jìn", "The powerful prince is honored with many horses."),
    (Earth, Fire, "Darkening of the Light", "明夷 Míng Yí", "In adversity it furthers one to be persevering."),
    (Wind, Fire, "The Family", "家人 Jiā Rén", "The perseverance of the woman furthers."),
    (Fire, Lake, "Opposition", "睽 Kuí", "In small matters, good fortune despite opposition."),
    (Water, Mountain, "Obstruction", "蹇 Jiǎn", "The southwest furthers; it furthers one to see the great one."),
    (Thunder, Water, "Deliverance", "解 Xiè", "Return brings good fortune; act quickly where something remains."),
    (Mountain, Lake, "Decrease", "損 Sǔn", "Decrease combined with sincerity brings supreme good fortune."),
    (Wind, Thunder, "Increase", "益 Yì", "It furthers one to undertake something and cross the great water."),
    (Lake, Heaven, "Break-through", "夬 Guài", "Announce the truth resolutely; do not resort to arms."),
    (Heaven, Wind, "Coming to Meet", "姤 Gòu", "The maiden is powerful; one should not marry such a maiden."),
    (Lake, Earth, "Gathering Together", "萃 Cuì", "The king approaches his temple; great offerings bring good fortune."),
    (Earth, Wind, "Pushing Upward", "升 Shēng", "Pushing upward has supreme success; do not fear."),
    (Lake, Water, "Oppression", "困 Kùn", "Perseverance of the great one brings good fortune; words are not believed."),
    (Water, Wind, "The Well", "井 Jǐng", "The town may change, but the well cannot."),
    (Lake, Fire, "Revolution", "革 Gé", "On your own day you are believed; remorse disappears."),
    (Fire, Wind, "The Caldron", "鼎 Dǐng", "Supreme good fortune and success."),
    (Thunder, Thunder, "The Arousing", "震 Zhèn", "Shock brings success; laughing words follow the fear."),
    (Mountain, Mountain, "Keeping Still", "艮 Gèn", "Keeping the back still so that one no longer feels the body."),
    (Wind, Mountain, "Development", "漸 Jiàn", "The maiden is given in marriage; gradual progress brings good fortune."),
    (Thunder, Lake, "The Marrying Maiden", "歸妹 Guī Mèi", "Undertakings bring misfortune; nothing furthers."),
    (Thunder, Fire, "Abundance", "豐 Fēng", "Be like the sun at midday; do not be sad."),
    (Fire, Mountain, "The Wanderer", "旅 Lǚ", "Success through smallness; perseverance brings the wanderer good fortune."),
    (Wind, Wind, "The Gentle", "巽 Xùn", "Success through what is small; it furthers one to have somewhere to go."),
    (Lake, Lake, "The Joyous", "兌 Duì", "Success; perseverance is favorable."),
    (Wind, Water, "Dispersion", "渙 Huàn", "The king approaches his temple; cross the great water."),
    (Water, Lake, "Limitation", "節 Jié", "Galling limitation must not be persevered in."),
    (Wind, Lake, "Inner Truth", "中孚 Zhōng Fú", "Pigs and fishes; inner truth brings good fortune."),
    (Thunder, Mountain, "Preponderance of the Small", "小過 Xiǎo Guò", "Small things may be done; great things should not be done."),
    (Water, Fire, "After Completion", "既濟 Jì Jì", "Success in small matters; at the beginning good fortune, at the end disorder."),
    (Fire, Water, "Before Completion", "未濟 Wèi Jì", "Success; the little fox gets its tail wet before crossing."),
];

/// The binary key of a trigram pair, upper trigram first.
pub fn key_for(upper: Trigram, lower: Trigram) -> String {
    format!("{}{}", upper.pattern(), lower.pattern())
}

impl Default for HexagramTable {
    fn default() -> Self {
        let hexagrams = KING_WEN
            .iter()
            .enumerate()
            .map(|(i, &(upper, lower, english, chinese, judgment))| {
                let record = HexagramRecord {
                    number: (i + 1) as u8,
                    english: english.to_string(),
                    chinese: chinese.to_string(),
                    judgment: judgment.to_string(),
                    element: trigram_element(upper).to_string(),
                };
                (key_for(upper, lower), record)
            })
            .collect();
        Self { hexagrams }
    }
}

impl HexagramTable {
    /// Record for `key`, or [`HexagramRecord::unknown`].
    pub fn lookup(&self, key: &BinaryKey) -> HexagramRecord {
        self.hexagrams
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(HexagramRecord::unknown)
    }

    /// Records in King Wen order, each with its key.
    pub fn in_order(&self) -> Vec<(&str, &HexagramRecord)> {
        let mut records: Vec<_> = self
            .hexagrams
            .iter()
            .map(|(k, r)| (k.as_str(), r))
            .collect();
        records.sort_by_key(|(_, r)| r.number);
        records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.hexagrams.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.hexagrams.is_empty()
    }
}
