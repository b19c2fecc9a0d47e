use chrono::Utc;
use julian_daylight::{daylight_info, CalendarDate, Daylight, GeoCoordinate, JulianDate, MJD};

fn main() {
    let now = Utc::now();
    let today = CalendarDate::from(now);
    let now_jd = JulianDate::from_utc(now);

    println!("UTC:  {today}");
    println!("{}", today.julian_day_number());
    println!("JD:   {now_jd}");
    println!("MJD:  {}", now_jd.to::<MJD>());

    let places = [
        ("London", GeoCoordinate::new(51.5074, -0.1278)),
        ("Quito", GeoCoordinate::new(-0.1807, -78.4678)),
        ("Tromsø", GeoCoordinate::new(69.6492, 18.9553)),
        ("McMurdo", GeoCoordinate::new(-77.8419, 166.6863)),
    ];

    for (name, place) in places {
        match daylight_info(&today, &place) {
            Daylight::Window(info) => match info.to_utc() {
                Some(utc) => println!(
                    "{name:>8} ({place}): sunrise {} sunset {} ({:.2} h)",
                    utc.start.format("%H:%M"),
                    utc.end.format("%H:%M"),
                    info.day_length().to::<qtty::Hour>().value(),
                ),
                None => println!("{name:>8} ({place}): out of range"),
            },
            Daylight::PolarDay { .. } => println!("{name:>8} ({place}): sun up all day"),
            Daylight::PolarNight { .. } => println!("{name:>8} ({place}): sun down all day"),
        }
    }
}
