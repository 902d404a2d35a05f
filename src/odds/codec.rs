/// Little-endian blob layout:
///
/// i32 triple count
///   [u8; 3] ranks descending, i32 bucket len, (i32 strength, u8 multiplicity)*
/// i32 pair count
///   [u8; 2] ranks descending, u16 rank
///
/// The highest pair rank is not stored; load reconstructs it as the
/// maximum. Corrupt input surfaces as OddsError::Corrupt, never a
/// panic.
impl OddsTable {
    pub fn save(&self, path: &Path) -> Result<(), OddsError> {
        log::info!("{:<32}{:<16}", "saving odds table", path.display());
        let mut writer = BufWriter::new(File::create(path)?);
        self.encode(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, OddsError> {
        log::info!("{:<32}{:<16}", "loading odds table", path.display());
        let mut reader = BufReader::new(File::open(path)?);
        Self::decode(&mut reader)
    }

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), OddsError> {
        writer.write_i32::<LE>(self.triples.len() as i32)?;
        for (key, bucket) in self.triples.iter() {
            writer.write_all(&key.values())?;
            writer.write_i32::<LE>(bucket.len() as i32)?;
            for (&strength, &count) in bucket.iter() {
                writer.write_i32::<LE>(strength)?;
                writer.write_u8(count)?;
            }
        }
        writer.write_i32::<LE>(self.pairs.len() as i32)?;
        for (key, &rank) in self.pairs.iter() {
            writer.write_all(&key.values())?;
            writer.write_u16::<LE>(rank)?;
        }
        Ok(())
    }

    fn decode<R: Read>(reader: &mut R) -> Result<Self, OddsError> {
        let mut triples = BTreeMap::new();
        for _ in 0..Self::length(reader, "triple count")? {
            let mut key = [0u8; 3];
            reader.read_exact(&mut key)?;
            let key = Triple::try_from(key)?;
            let mut bucket = BTreeMap::new();
            for _ in 0..Self::length(reader, "bucket length")? {
                let strength = reader.read_i32::<LE>()?;
                let count = reader.read_u8()?;
                bucket.insert(strength, count);
            }
            triples.insert(key, bucket);
        }
        let mut pairs = BTreeMap::new();
        for _ in 0..Self::length(reader, "pair count")? {
            let mut key = [0u8; 2];
            reader.read_exact(&mut key)?;
            pairs.insert(Pair::try_from(key)?, reader.read_u16::<LE>()?);
        }
        let highest = pairs.values().copied().max().unwrap_or(0);
        Ok(Self {
            triples,
            pairs,
            highest,
        })
    }

    fn length<R: Read>(reader: &mut R, what: &str) -> Result<i32, OddsError> {
        match reader.read_i32::<LE>()? {
            n if n < 0 => Err(OddsError::Corrupt(format!("negative {what}: {n}"))),
            n => Ok(n),
        }
    }
}

use super::table::OddsError;
use super::table::OddsTable;
use super::table::Pair;
use super::table::Triple;
use byteorder::LE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
