// Purity tiers for gold (karat) and silver
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::Metal;

/// 标准纯度档位，成色系数为固定常量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purity {
    #[serde(rename = "24K")]
    K24,
    #[serde(rename = "22K")]
    K22,
    #[serde(rename = "21K")]
    K21,
    #[serde(rename = "18K")]
    K18,
    /// 名义 0.999，按 1.0 计算
    #[serde(rename = "fine")]
    FineSilver,
    #[serde(rename = "sterling")]
    Sterling,
}

impl Purity {
    const GOLD: [Purity; 4] = [Purity::K24, Purity::K22, Purity::K21, Purity::K18];
    const SILVER: [Purity; 2] = [Purity::FineSilver, Purity::Sterling];

    pub fn fraction(self) -> Decimal {
        match self {
            Purity::K24 => dec!(1.000),
            Purity::K22 => dec!(0.916),
            Purity::K21 => dec!(0.875),
            Purity::K18 => dec!(0.750),
            Purity::FineSilver => dec!(1.000),
            Purity::Sterling => dec!(0.925),
        }
    }

    pub fn metal(self) -> Metal {
        match self {
            Purity::K24 | Purity::K22 | Purity::K21 | Purity::K18 => Metal::Gold,
            Purity::FineSilver | Purity::Sterling => Metal::Silver,
        }
    }

    /// 按成色从高到低列出该金属的档位
    pub fn tiers_for(metal: Metal) -> &'static [Purity] {
        match metal {
            Metal::Gold => &Self::GOLD,
            Metal::Silver => &Self::SILVER,
        }
    }
}
