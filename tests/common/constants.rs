//! Fixture file contents and the keys they contain

#![allow(dead_code)]

pub const HSK1_SOURCE: &str = r#"[{"s":"爸爸","r":"父","q":1349,"p":["n"],"f":[{"t":"爸爸","i":{"y":"bàba","n":"ba4 ba5","w":"pa4 pa5"},"m":["(informal) father"],"c":["个"]}]},{"s":"妈","r":"女","q":900,"p":["n"],"f":[{"t":"媽","i":{"y":"mā","n":"ma1"},"m":["ma","mom"]},{"t":"媽","i":{"y":"mǎ","n":"ma3"},"m":["horse"]}]},{"s":"吗","r":"口","q":80,"p":["u"],"f":[]},{"s":"了","f":[{"i":{"n":"liao3"}}]},{"s":"了","f":[{"i":{"n":"le5"}}]}]"#;

pub const HSK1_FLAT: &str = r#"[{"s":"爸爸","y":"bàba","e":"father","q":1349},{"s":"妈","y":"mā","e":"mom","q":900},{"s":"吗","y":"ma","e":"question particle","q":80},{"s":"了","y":"le","e":"completed action","q":5},{"s":"谁知道","y":"shéi zhīdào","e":"who knows","q":20000}]"#;

pub const HSK2_SOURCE: &str = r#"[{"s":"吧","f":[{"i":{"n":"ba5"}}]},{"s":"比","f":[{"i":{"n":"bi3"}}]}]"#;

pub const HSK2_FLAT: &str = r#"[{"s":"吧","e":"particle"},{"s":"比","e":"compare"}]"#;

pub const HSK1_FLAT_EXPECTED: &str = r#"[{"s":"爸爸","y":"bàba","e":"father","q":1349,"tn":"ba4 ba5"},{"s":"妈","y":"mā","e":"mom","q":900,"tn":"ma1"},{"s":"吗","y":"ma","e":"question particle","q":80},{"s":"了","y":"le","e":"completed action","q":5,"tn":"le5"},{"s":"谁知道","y":"shéi zhīdào","e":"who knows","q":20000}]"#;

pub const HSK2_FLAT_EXPECTED: &str =
    r#"[{"s":"吧","e":"particle","tn":"ba5"},{"s":"比","e":"compare","tn":"bi3"}]"#;

pub const UNMATCHED_HSK1_KEYS: &[&str] = &["吗", "谁知道"];
