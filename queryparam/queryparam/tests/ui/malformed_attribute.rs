use queryparam::Record;

#[derive(Record)]
pub struct Search {
    #[query(text)]
    pub text: String,
}

fn main() {}
