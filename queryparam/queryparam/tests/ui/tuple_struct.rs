use queryparam::Record;

#[derive(Record)]
pub struct Pair(pub u32, pub u32);

fn main() {}
