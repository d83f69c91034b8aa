//! Built-in scenario data: the baseline station layout and a sample feed.

use ed_core::{Point, UnitKind};
use ed_feed::StationSpec;

/// Two stations per type, two units each.
pub fn baseline_stations() -> Vec<StationSpec> {
    let s = |name: &str, kind, x, y| StationSpec::new(name, kind, Point::new(x, y), 2);
    vec![
        s("F1", UnitKind::Fire,    20.0,  20.0),
        s("F2", UnitKind::Fire,    180.0, 20.0),
        s("P1", UnitKind::Police,  50.0,  100.0),
        s("P2", UnitKind::Police,  150.0, 120.0),
        s("H1", UnitKind::Medical, 100.0, 30.0),
        s("H2", UnitKind::Medical, 100.0, 170.0),
    ]
}

// Used when no `--emergencies` file is given.  Two hot spots (south-west
// fires, north-east police calls) that the baseline layout covers poorly.
pub const SAMPLE_FEED_CSV: &str = "\
t,x,y,etype,priority_s,id\n\
0,35,40,fire,60,1\n\
3,160,170,police,45,2\n\
8,40,30,medical,120,3\n\
15,170,160,police,30,4\n\
21,30,45,fire,30,5\n\
30,100,100,medical,240,6\n\
34,165,175,police,60,7\n\
42,25,35,fire,120,8\n\
55,150,180,medical,90,9\n\
61,45,50,fire,45,10\n\
75,175,165,police,120,11\n\
82,60,20,medical,60,12\n\
96,155,150,police,30,13\n\
110,35,30,fire,300,14\n\
118,120,60,medical,180,15\n\
130,170,170,police,90,16\n\
144,20,60,fire,60,17\n\
150,90,140,medical,120,18\n\
167,160,165,police,45,19\n\
181,40,40,fire,30,20\n\
";
