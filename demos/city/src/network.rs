//! Embedded synthetic city.
//!
//! Six locations: a connected core of five plus one isolated depot that no
//! road reaches.  One hospital and one fire station sit in the core.
//!
//! ```text
//!   1 ──(4,6)── 2 ──(3,3)── 3 [fire]
//!   │                       │
//! (10,0)                  (2,3)
//!   │                       │
//!   4 ──(5,3)── 5 [medical]─┘      6 (isolated)
//! ```

use std::io::Cursor;

use er_city::{CityGraph, CityResult, load_city_reader};
use er_schedule::{Incident, ScheduleResult, load_incidents_reader};

const LOCATIONS_CSV: &str = "\
id,name,lat,lon,category\n\
1,Riverside,30.7100,-88.0700,residential\n\
2,Old Town,30.6950,-88.0500,commercial\n\
3,Harbor,30.6900,-88.0300,industrial\n\
4,Westgate,30.6800,-88.0750,residential\n\
5,Midtown,30.6850,-88.0450,commercial\n\
6,North Depot,30.7600,-88.1200,industrial\n\
";

// Weight = distance + delay / 3.
const ROADS_CSV: &str = "\
source,target,distance,delay\n\
1,2,4,6\n\
2,3,3,3\n\
3,5,2,3\n\
1,4,10,0\n\
4,5,5,3\n\
";

const FACILITIES_CSV: &str = "\
location_id,kind,name,capacity\n\
5,medical,Midtown General,high\n\
3,fire,Harbor Station 1,medium\n\
";

const INCIDENTS_CSV: &str = "\
id,location_id,kind,severity,description\n\
1,1,medical,low,sprained ankle\n\
2,4,fire,high,kitchen fire\n\
3,2,medical,high,cardiac arrest\n\
4,6,medical,medium,fall at depot\n\
5,5,fire,medium,dumpster fire\n\
6,3,medical,low,minor burn\n\
";

/// Build the embedded city graph.
pub fn build_city() -> CityResult<CityGraph> {
    load_city_reader(
        Cursor::new(LOCATIONS_CSV),
        Cursor::new(ROADS_CSV),
        Cursor::new(FACILITIES_CSV),
    )
}

/// The embedded incident feed, in arrival order.
pub fn incident_feed() -> ScheduleResult<Vec<Incident>> {
    load_incidents_reader(Cursor::new(INCIDENTS_CSV))
}
