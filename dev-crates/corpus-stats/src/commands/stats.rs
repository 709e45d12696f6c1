use wordcorpus::corpus::Corpus;
use wordcorpus::vocab::WordVocab;

use crate::LogArgs;

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Corpus directory holding train.txt, valid.txt, and test.txt.
    data_dir: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of train tokens to preview.
    #[arg(long, default_value = "10")]
    preview: usize,
}

impl StatsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        log::info!("loading corpus: {}", self.data_dir);
        let corpus: Corpus<u32> = Corpus::load_dir(&self.data_dir)?;

        log::info!("Vocabulary Size: {}", corpus.vocab.len());
        for (name, split) in [
            ("train", &corpus.train),
            ("valid", &corpus.valid),
            ("test", &corpus.test),
        ] {
            log::info!("{name}: {} tokens", split.len());
        }

        if self.preview > 0 {
            let head = &corpus.train[..self.preview.min(corpus.train.len())];
            log::info!("train[..{}]: {:?}", head.len(), head);
            log::info!("train words: {:?}", decode_words(&corpus.vocab, head));
        }

        Ok(())
    }
}

fn decode_words<'a>(
    vocab: &'a WordVocab<u32>,
    tokens: &[u32],
) -> Vec<&'a str> {
    tokens
        .iter()
        .filter_map(|&t| vocab.lookup_word(t))
        .collect()
}
