use queryparam::Record;

#[derive(Record)]
pub struct Search {
    #[query("q")]
    #[query("text")]
    pub text: String,
}

fn main() {}
