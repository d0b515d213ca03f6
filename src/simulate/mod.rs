//! Mock reference genomes and reads for trying out the pipeline.
//!
//! For every label a random reference over `ACGT` is written to
//! `<label>.fasta` (single record `seq0`). Reads are sampled uniformly from
//! each reference and written to one FASTQ file with ids
//! `<label>|seq0|pos<start>`, which [crate::evaluate] reads back as ground
//! truth. Quality strings are random characters from `!"#$%&'`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const NUCLEOTIDES: &[u8] = b"ACGT";
const MOCK_QUALITIES: &[u8] = b"!\"#$%&'";

/// Name of the FASTQ file holding the mixed reads.
pub const READS_FILE_NAME: &str = "mock_data.fastq";

/// Files written by [MockDataGenerator::generate].
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    /// One reference per label, in label order
    pub references: Vec<PathBuf>,
    pub reads: PathBuf,
}

/// Seeded generator of mock references and reads.
///
/// # Example
/// ```
/// use kmertag::simulate::MockDataGenerator;
///
/// let mut generator = MockDataGenerator::new(42).with_reference_len(50).with_read_len(10);
/// let reference = generator.random_sequence(50);
/// assert_eq!(reference.len(), 50);
/// assert!(reference.iter().all(|b| b"ACGT".contains(b)));
/// ```
#[derive(Debug, Clone)]
pub struct MockDataGenerator {
    rng: StdRng,
    reference_len: usize,
    read_len: usize,
    reads_per_reference: usize,
}

impl MockDataGenerator {
    /// Creates a generator with reference length 500, read length 100 and 50
    /// reads per reference.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reference_len: 500,
            read_len: 100,
            reads_per_reference: 50,
        }
    }

    pub fn with_reference_len(mut self, reference_len: usize) -> Self {
        self.reference_len = reference_len;
        self
    }

    pub fn with_read_len(mut self, read_len: usize) -> Self {
        self.read_len = read_len;
        self
    }

    pub fn with_reads_per_reference(mut self, reads_per_reference: usize) -> Self {
        self.reads_per_reference = reads_per_reference;
        self
    }

    /// Draws a uniform random nucleotide sequence.
    pub fn random_sequence(&mut self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|_| NUCLEOTIDES[self.rng.gen_range(0..NUCLEOTIDES.len())])
            .collect()
    }

    /// Writes one reference per label plus the mixed reads into `dir`.
    ///
    /// # Errors
    /// Returns an I/O error if a file cannot be written, or
    /// [io::ErrorKind::InvalidInput] if reads are longer than the references.
    pub fn generate<P: AsRef<Path>>(&mut self, dir: P, labels: &[String]) -> io::Result<MockData> {
        if self.read_len == 0 || self.read_len > self.reference_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Read length {} must be in 1..={} (reference length)",
                    self.read_len, self.reference_len
                ),
            ));
        }

        let dir = dir.as_ref();
        let reads_path = dir.join(READS_FILE_NAME);
        let mut reads_out = BufWriter::new(File::create(&reads_path)?);
        let mut references = Vec::with_capacity(labels.len());

        for label in labels {
            let reference = self.random_sequence(self.reference_len);
            let path = dir.join(format!("{label}.fasta"));
            let mut out = BufWriter::new(File::create(&path)?);
            writeln!(out, ">seq0")?;
            out.write_all(&reference)?;
            writeln!(out)?;
            out.flush()?;
            log::debug!("Wrote reference {}", path.display());
            references.push(path);

            self.write_reads(&mut reads_out, label, &reference)?;
        }
        reads_out.flush()?;

        log::info!(
            "Simulated {} references and {} reads in {}",
            labels.len(),
            labels.len() * self.reads_per_reference,
            dir.display()
        );
        Ok(MockData {
            references,
            reads: reads_path,
        })
    }

    fn write_reads<W: Write>(&mut self, out: &mut W, label: &str, reference: &[u8]) -> io::Result<()> {
        for _ in 0..self.reads_per_reference {
            let start = self.rng.gen_range(0..=reference.len() - self.read_len);
            let quality: Vec<u8> = (0..self.read_len)
                .map(|_| MOCK_QUALITIES[self.rng.gen_range(0..MOCK_QUALITIES.len())])
                .collect();

            writeln!(out, "@{label}|seq0|pos{start}")?;
            out.write_all(&reference[start..start + self.read_len])?;
            writeln!(out, "\n+")?;
            out.write_all(&quality)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
