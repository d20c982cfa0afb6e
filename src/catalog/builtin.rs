use super::{Catalog, Config, Line};

const LINES: &[(&str, &str, &str)] = &[
    ("yamanote", "山手線", "JR-East.Yamanote"),
    ("chuo_rapid", "中央線快速", "JR-East.ChuoRapid"),
    ("keihin_tohoku", "京浜東北線・根岸線", "JR-East.KeihinTohokuNegishi"),
    ("sobu_local", "総武線各駅停車", "JR-East.ChuoSobuLocal"),
    ("tokaido", "東海道線", "JR-East.Tokaido"),
    ("yokosuka", "横須賀線", "JR-East.Yokosuka"),
    ("sobu_rapid", "総武快速線", "JR-East.SobuRapid"),
    ("joban_rapid", "常磐線快速", "JR-East.JobanRapid"),
    ("joban_local", "常磐線各駅停車", "JR-East.JobanLocal"),
    ("keiyo", "京葉線", "JR-East.Keiyo"),
    ("musashino", "武蔵野線", "JR-East.Musashino"),
    ("nambu", "南武線", "JR-East.Nambu"),
    ("yokohama", "横浜線", "JR-East.Yokohama"),
    ("saikyo", "埼京線", "JR-East.SaikyoKawagoe"),
    ("kawagoe", "川越線", "JR-East.Kawagoe"),
    ("shonan_shinjuku", "湘南新宿ライン", "JR-East.ShonanShinjuku"),
    ("chuo", "中央本線", "JR-East.Chuo"),
    ("ome", "青梅線", "JR-East.Ome"),
    ("itsukaichi", "五日市線", "JR-East.Itsukaichi"),
    ("utsunomiya", "宇都宮線", "JR-East.Utsunomiya"),
    ("takasaki", "高崎線", "JR-East.Takasaki"),
];

// Longer keywords must come before their prefixes ("chuo rapid" before "chuo").
const KEYWORDS: &[(&str, &str)] = &[
    ("yamanote", "yamanote"),
    ("chuo rapid", "chuo_rapid"),
    ("chuo-sobu local", "sobu_local"),
    ("keihin-tohoku", "keihin_tohoku"),
    ("negishi", "keihin_tohoku"),
    ("tokaido", "tokaido"),
    ("yokosuka", "yokosuka"),
    ("sobu rapid", "sobu_rapid"),
    ("joban rapid", "joban_rapid"),
    ("joban local", "joban_local"),
    ("keiyo", "keiyo"),
    ("musashino", "musashino"),
    ("nambu", "nambu"),
    ("yokohama", "yokohama"),
    ("saikyo", "saikyo"),
    ("kawagoe", "kawagoe"),
    ("shonan-shinjuku", "shonan_shinjuku"),
    ("chuo", "chuo"),
    ("ome", "ome"),
    ("itsukaichi", "itsukaichi"),
    ("utsunomiya", "utsunomiya"),
    ("takasaki", "takasaki"),
];

// Planner feeds built from JR East GTFS use bare numeric route ids.
const NUMERIC_ROUTES: &[(&str, &str)] = &[
    ("10", "yamanote"),
    ("11", "chuo_rapid"),
    ("12", "sobu_local"),
    ("21", "yokohama"),
    ("22", "keihin_tohoku"),
];

impl Catalog {
    /// The JR East network the live feeds currently cover.
    pub fn builtin() -> Self {
        let config = Config::default();
        // The tables above are consistent, so none of these steps can fail.
        Catalog::new()
            .with_lines(
                LINES
                    .iter()
                    .map(|(id, name, railway_id)| Line::new(id, name, railway_id)),
            )
            .and_then(|catalog| catalog.with_keywords(KEYWORDS.iter().copied()))
            .and_then(|catalog| catalog.with_numeric_routes(NUMERIC_ROUTES.iter().copied()))
            .map(|catalog| catalog.with_operator_prefixes(&config.operator_prefixes))
            .unwrap_or_default()
    }
}

#[test]
fn builtin_tables_are_consistent() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.lines().len(), LINES.len());
    assert_eq!(catalog.keywords().count(), KEYWORDS.len());
    assert_eq!(catalog.operator_prefixes().collect::<Vec<_>>(), vec!["JR-East."]);
}
