//! Han variant hinting for Chinese text.
//!
//! Han characters alone do not say whether a text is Simplified or
//! Traditional Chinese. The Unihan database records, per character, whether a
//! simplified or traditional variant form exists; a traditional-form
//! character carries a `kSimplifiedVariant` mapping and vice versa. Counting
//! those mappings over a text gives a reliable signal: text dominated by
//! characters that *have* simplified variants is traditional text.
//!
//! The table below is a hand-grown subset of Unihan
//! `kSimplifiedVariant`/`kTraditionalVariant` entries covering frequent
//! characters. The counting heuristic only needs relative frequencies, so
//! frequent-character coverage is what matters, not completeness.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The character has a simplified variant form (it is a traditional form).
pub const HAS_SIMPLIFIED: u8 = 1 << 0;

/// The character has a traditional variant form (it is a simplified form).
pub const HAS_TRADITIONAL: u8 = 1 << 1;

/// (traditional, simplified) pairs from Unihan variant data.
const VARIANT_PAIRS: &[(char, char)] = &[
    ('國', '国'),
    ('東', '东'),
    ('車', '车'),
    ('馬', '马'),
    ('鳥', '鸟'),
    ('魚', '鱼'),
    ('龍', '龙'),
    ('門', '门'),
    ('開', '开'),
    ('關', '关'),
    ('長', '长'),
    ('風', '风'),
    ('飛', '飞'),
    ('華', '华'),
    ('漢', '汉'),
    ('語', '语'),
    ('話', '话'),
    ('說', '说'),
    ('讀', '读'),
    ('寫', '写'),
    ('書', '书'),
    ('學', '学'),
    ('習', '习'),
    ('體', '体'),
    ('點', '点'),
    ('時', '时'),
    ('間', '间'),
    ('問', '问'),
    ('見', '见'),
    ('覺', '觉'),
    ('觀', '观'),
    ('視', '视'),
    ('親', '亲'),
    ('電', '电'),
    ('腦', '脑'),
    ('機', '机'),
    ('氣', '气'),
    ('會', '会'),
    ('過', '过'),
    ('還', '还'),
    ('這', '这'),
    ('邊', '边'),
    ('進', '进'),
    ('遠', '远'),
    ('運', '运'),
    ('達', '达'),
    ('遲', '迟'),
    ('選', '选'),
    ('錢', '钱'),
    ('銀', '银'),
    ('鐵', '铁'),
    ('錯', '错'),
    ('鐘', '钟'),
    ('鋼', '钢'),
    ('頭', '头'),
    ('頁', '页'),
    ('顏', '颜'),
    ('顆', '颗'),
    ('題', '题'),
    ('類', '类'),
    ('顯', '显'),
    ('飯', '饭'),
    ('飲', '饮'),
    ('館', '馆'),
    ('養', '养'),
    ('黃', '黄'),
    ('齊', '齐'),
    ('齒', '齿'),
    ('廣', '广'),
    ('廠', '厂'),
    ('麗', '丽'),
    ('歷', '历'),
    ('曆', '历'),
    ('壓', '压'),
    ('廳', '厅'),
    ('廟', '庙'),
    ('愛', '爱'),
    ('憶', '忆'),
    ('應', '应'),
    ('戰', '战'),
    ('數', '数'),
    ('樂', '乐'),
    ('標', '标'),
    ('樣', '样'),
    ('樹', '树'),
    ('橋', '桥'),
    ('檢', '检'),
    ('歡', '欢'),
    ('歲', '岁'),
    ('殺', '杀'),
    ('測', '测'),
    ('濟', '济'),
    ('滅', '灭'),
    ('滿', '满'),
    ('漁', '渔'),
    ('潔', '洁'),
    ('無', '无'),
    ('熱', '热'),
    ('爾', '尔'),
    ('牆', '墙'),
    ('獨', '独'),
    ('現', '现'),
    ('環', '环'),
    ('當', '当'),
    ('畫', '画'),
    ('異', '异'),
    ('發', '发'),
    ('盤', '盘'),
    ('監', '监'),
    ('眾', '众'),
    ('礎', '础'),
    ('禮', '礼'),
    ('萬', '万'),
    ('億', '亿'),
    ('節', '节'),
    ('紅', '红'),
    ('純', '纯'),
    ('紙', '纸'),
    ('級', '级'),
    ('納', '纳'),
    ('細', '细'),
    ('終', '终'),
    ('結', '结'),
    ('給', '给'),
    ('統', '统'),
    ('經', '经'),
    ('綠', '绿'),
    ('維', '维'),
    ('網', '网'),
    ('緊', '紧'),
    ('線', '线'),
    ('練', '练'),
    ('總', '总'),
    ('續', '续'),
    ('約', '约'),
    ('義', '义'),
    ('聖', '圣'),
    ('聯', '联'),
    ('聲', '声'),
    ('職', '职'),
    ('舊', '旧'),
    ('藝', '艺'),
    ('藥', '药'),
    ('蘭', '兰'),
    ('處', '处'),
    ('號', '号'),
    ('規', '规'),
    ('計', '计'),
    ('記', '记'),
    ('訓', '训'),
    ('訪', '访'),
    ('設', '设'),
    ('許', '许'),
    ('詞', '词'),
    ('試', '试'),
    ('詩', '诗'),
    ('認', '认'),
    ('誰', '谁'),
    ('課', '课'),
    ('調', '调'),
    ('談', '谈'),
    ('請', '请'),
    ('論', '论'),
    ('講', '讲'),
    ('謝', '谢'),
    ('識', '识'),
    ('議', '议'),
    ('護', '护'),
    ('讓', '让'),
    ('貝', '贝'),
    ('負', '负'),
    ('財', '财'),
    ('貨', '货'),
    ('質', '质'),
    ('購', '购'),
    ('賽', '赛'),
    ('軍', '军'),
    ('輕', '轻'),
    ('輸', '输'),
    ('轉', '转'),
    ('辦', '办'),
    ('農', '农'),
    ('郵', '邮'),
    ('鄉', '乡'),
    ('醫', '医'),
    ('釋', '释'),
    ('針', '针'),
    ('釣', '钓'),
    ('鏡', '镜'),
    ('陰', '阴'),
    ('陽', '阳'),
    ('隊', '队'),
    ('階', '阶'),
    ('際', '际'),
    ('險', '险'),
    ('雖', '虽'),
    ('雙', '双'),
    ('雜', '杂'),
    ('離', '离'),
    ('難', '难'),
    ('雞', '鸡'),
    ('韓', '韩'),
    ('順', '顺'),
    ('預', '预'),
    ('領', '领'),
    ('驗', '验'),
    ('騎', '骑'),
    ('驚', '惊'),
    ('鳳', '凤'),
    ('鳴', '鸣'),
    ('鴨', '鸭'),
    ('麥', '麦'),
    ('徑', '径'),
    ('個', '个'),
    ('產', '产'),
    ('晝', '昼'),
    ('衛', '卫'),
    ('圍', '围'),
    ('為', '为'),
    ('從', '从'),
    ('條', '条'),
    ('單', '单'),
    ('圓', '圆'),
    ('場', '场'),
    ('報', '报'),
    ('島', '岛'),
    ('帶', '带'),
    ('幾', '几'),
    ('彈', '弹'),
    ('徹', '彻'),
    ('態', '态'),
    ('憲', '宪'),
    ('擊', '击'),
    ('據', '据'),
    ('舉', '举'),
    ('層', '层'),
    ('屬', '属'),
    ('師', '师'),
    ('幣', '币'),
    ('張', '张'),
    ('強', '强'),
    ('錄', '录'),
    ('勞', '劳'),
    ('務', '务'),
    ('動', '动'),
    ('勝', '胜'),
    ('區', '区'),
    ('協', '协'),
    ('參', '参'),
    ('變', '变'),
    ('讚', '赞'),
];

static VARIANT_FLAGS: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(VARIANT_PAIRS.len() * 2);
    for &(traditional, simplified) in VARIANT_PAIRS {
        *map.entry(traditional).or_insert(0) |= HAS_SIMPLIFIED;
        *map.entry(simplified).or_insert(0) |= HAS_TRADITIONAL;
    }
    map
});

/// Variant flags for a character, or 0 if the character is not in the table.
pub fn variant_flags(ch: char) -> u8 {
    VARIANT_FLAGS.get(&ch).copied().unwrap_or(0)
}

/// True if `ch` has a simplified variant form (so `ch` is traditional).
pub fn has_simplified_variant(ch: char) -> bool {
    variant_flags(ch) & HAS_SIMPLIFIED != 0
}

/// True if `ch` has a traditional variant form (so `ch` is simplified).
pub fn has_traditional_variant(ch: char) -> bool {
    variant_flags(ch) & HAS_TRADITIONAL != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_character_has_simplified_variant() {
        assert!(has_simplified_variant('國'));
        assert!(!has_traditional_variant('國'));
    }

    #[test]
    fn simplified_character_has_traditional_variant() {
        assert!(has_traditional_variant('国'));
        assert!(!has_simplified_variant('国'));
    }

    #[test]
    fn shared_character_has_no_flags() {
        // 的 is written identically in both forms
        assert_eq!(variant_flags('的'), 0);
    }

    #[test]
    fn non_han_character_has_no_flags() {
        assert_eq!(variant_flags('a'), 0);
        assert_eq!(variant_flags('あ'), 0);
    }

    #[test]
    fn merged_simplification_sets_both_directions() {
        // 历 is the simplification of both 歷 and 曆
        assert!(has_traditional_variant('历'));
        assert!(has_simplified_variant('歷'));
        assert!(has_simplified_variant('曆'));
    }

    #[test]
    fn table_has_no_conflicting_pairs() {
        // No character should be both purely traditional and purely
        // simplified unless it genuinely appears on both sides of a pair.
        for &(traditional, simplified) in VARIANT_PAIRS {
            assert_ne!(traditional, simplified);
        }
    }
}
