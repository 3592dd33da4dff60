use ipnetwork::IpNetwork;

/*-------------------------------------------------------------------------------------------------
  Provider Batch
-------------------------------------------------------------------------------------------------*/

/// One block of address space supplied by a provider feed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    /// CIDR text, e.g. `"104.16.0.0/13"`.
    Cidr(String),

    /// Already-parsed network prefix.
    Network(IpNetwork),

    /// Inclusive address range as text; a single address has equal bounds.
    Range(String, String),
}

/// The complete set of blocks a provider currently publishes for one provenance name.
///
/// A batch replaces everything previously recorded under its name; see
/// [IntervalSet::refresh](crate::IntervalSet::refresh).
///
/// ```
/// let mut batch = ipcat::Batch::new("Cloudflare Inc", "https://www.cloudflare.com/");
/// batch.cidr("104.16.0.0/13").range("1.1.1.1", "1.1.1.1");
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    name: String,
    url: String,
    blocks: Vec<Block>,
}

impl Batch {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            blocks: Vec::new(),
        }
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn cidr(&mut self, cidr: &str) -> &mut Self {
        self.push(Block::Cidr(cidr.to_string()))
    }

    pub fn network(&mut self, network: IpNetwork) -> &mut Self {
        self.push(Block::Network(network))
    }

    pub fn range(&mut self, left: &str, right: &str) -> &mut Self {
        self.push(Block::Range(left.to_string(), right.to_string()))
    }
}

impl Extend<Block> for Batch {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}
