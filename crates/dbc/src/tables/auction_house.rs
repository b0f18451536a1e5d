use crate::{
    field::{Int, Key, Loc},
    file::DbcTable,
};

#[derive(Debug, Clone, Copy)]
pub struct AuctionHouse;

impl DbcTable for AuctionHouse {
    const TABLE_NAME: &'static str = "AuctionHouse";
    const FIELD_COUNT: u32 = 21;
    const RECORD_SIZE: usize = 84;
}

impl AuctionHouse {
    pub const ID: Key = Key::at(0);
    pub const FACTION_ID: Int = Int::at(4);
    /// Percent of the vendor price taken as a deposit.
    pub const DEPOSIT_RATE: Int = Int::at(8);
    /// Percent of the sale price taken as a cut.
    pub const CONSIGNMENT_RATE: Int = Int::at(12);
    pub const NAME: Loc = Loc::at(16);
}
