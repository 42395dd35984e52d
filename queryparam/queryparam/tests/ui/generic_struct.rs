use queryparam::Record;

#[derive(Record)]
pub struct Page<T> {
    pub items: Vec<T>,
}

fn main() {}
