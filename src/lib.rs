pub mod calendarerror;
pub mod datekey;
pub mod region;
pub mod yearversioned;

pub mod floatingdate {
    pub mod hijrifeast;
    pub mod orthodoxeaster;
    pub mod tabulated;
}

pub mod ruletable {
    pub mod federal;
    pub mod holidayrule;
    pub mod regional;
    pub mod special;
}

pub mod resolver;
pub mod queries;

pub use calendarerror::CalendarError;
pub use datekey::DateKey;
pub use queries::{holidays, is_business_day, is_holiday, is_short_business_day};
pub use region::Region;
pub use resolver::HolidayMap;
