use queryparam::Record;

#[derive(Record)]
pub struct Marker;

fn main() {}
