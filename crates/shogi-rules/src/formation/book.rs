//! 定義の集合（FormationBook）と TOML からの読み込み
//!
//! ```toml
//! [[formation]]
//! name = "美濃囲い"
//! category = "castle"
//! expression = { all = [
//!     { piece = { kind = "king", row = 7, col = 7 } },
//!     { piece = { kind = "gold", row = 7, col = 6 } },
//! ] }
//!
//! [[formation]]
//! name = "棒銀"
//! category = "opening"
//! turn_range = { from = 10 }
//! expression = { piece = { kind = "silver", col = 7 } }
//! ```

use std::sync::LazyLock;

use log::debug;
use serde::{Deserialize, Serialize};

use super::builtin;
use super::rules::{Category, FormationRule};
use crate::error::{Result, ShogiError};
use crate::position::Position;
use crate::types::Side;

static BUILTIN: LazyLock<FormationBook> = LazyLock::new(|| {
    let mut rules = builtin::castles();
    rules.extend(builtin::openings());
    FormationBook { rules }
});

/// 順序付きの定義の集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationBook {
    #[serde(rename = "formation", default)]
    rules: Vec<FormationRule>,
}

impl FormationBook {
    pub fn new() -> FormationBook {
        FormationBook::default()
    }

    /// 組み込みの囲い 25 種と戦法 16 種（囲いが先）
    pub fn builtin() -> FormationBook {
        BUILTIN.clone()
    }

    /// TOML の `[[formation]]` 配列から読み込む
    pub fn from_toml_str(text: &str) -> Result<FormationBook> {
        let book: FormationBook =
            toml::from_str(text).map_err(|e| ShogiError::MalformedFormation(e.to_string()))?;
        for rule in &book.rules {
            if rule.name.trim().is_empty() {
                return Err(ShogiError::MalformedFormation("formation without a name".into()));
            }
            if let Some(bad) = rule.expression.find_out_of_range() {
                return Err(ShogiError::MalformedFormation(format!(
                    "{}: coordinate out of range in {bad:?}",
                    rule.name
                )));
            }
        }
        debug!("loaded {} formation rules", book.rules.len());
        Ok(book)
    }

    /// 後ろに定義を追加する
    pub fn extend(&mut self, other: FormationBook) {
        self.rules.extend(other.rules);
    }

    pub fn push(&mut self, rule: FormationRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FormationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FormationRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// 指定種別の定義
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &FormationRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    /// `turn` 手目の局面で `side` について成立している定義（定義順）
    pub fn detect(&self, position: &Position, side: Side, turn: u32) -> Vec<&FormationRule> {
        self.rules
            .iter()
            .filter(|rule| super::rules::matches(position, rule, side, turn))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FormationBook {
    type Item = &'a FormationRule;
    type IntoIter = std::slice::Iter<'a, FormationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
