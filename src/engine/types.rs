/// 盤面の行数（重力方向、行0が最下段）。
pub const BOARD_HEIGHT: u8 = 6;

/// 盤面の列数。
pub const BOARD_WIDTH: u8 = 7;

/// 手番（トークンの色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Token {
    /// 先手。
    Red,
    /// 後手。
    Yellow,
}

impl Token {
    /// 相手側のトークンを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

/// 着手位置（列と、重力で決まる行の組）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// 列（0..=6）。
    column: u8,
    /// 行（0..=5、行0が最下段）。
    row: u8,
}

impl Move {
    /// そのマスを表すビット（`u64`、`column * BOARD_HEIGHT + row` 番目）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u64 {
        let one = u64::MIN.wrapping_add(1);
        let shift = u32::from(self.column)
            .wrapping_mul(u32::from(BOARD_HEIGHT))
            .wrapping_add(u32::from(self.row));

        one.checked_shl(shift).unwrap_or(u64::MIN)
    }

    /// 列（0..=6）を返す。
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// 列と行から `Move` を生成する。範囲外なら `None`。
    #[inline]
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column >= BOARD_WIDTH || row >= BOARD_HEIGHT {
            return None;
        }

        Some(Self { column, row })
    }

    /// 列と行から `Move` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn new_unchecked(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// `(dx, dy)` だけずらした位置を返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let column_i16 = match i16::from(self.column).checked_add(i16::from(dx)) {
            Some(value) => value,
            None => return None,
        };
        let row_i16 = match i16::from(self.row).checked_add(i16::from(dy)) {
            Some(value) => value,
            None => return None,
        };

        let column = match u8::try_from(column_i16) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };
        let row = match u8::try_from(row_i16) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };

        Self::new(column, row)
    }

    /// 行（0..=5）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }
}
