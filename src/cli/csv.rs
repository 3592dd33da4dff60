use ipcat::{RankEntry, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Provider Statistics to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save_stats(rank: &[RankEntry], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.write_record(["Datacenter Name", " Total IPs"])?;

    // Write provider records
    for entry in rank {
        writer.write_record([entry.name.as_str(), entry.total.to_string().as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
