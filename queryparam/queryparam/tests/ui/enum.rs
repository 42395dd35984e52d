use queryparam::Record;

#[derive(Record)]
pub enum Mode {
    Fast,
    Slow,
}

fn main() {}
