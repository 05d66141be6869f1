use crate::{
    conv::cost::CostModel,
    error::{Error, Result},
    traits::ConfigFS,
};

use tokio::{fs::File, io::AsyncReadExt};
use tokio::io::{AsyncWriteExt, BufWriter};

fn check_json_path(path: &str) -> Result<()> {
    if !path.ends_with(".json") {
        return Err(Error::InvalidArgument {
            reason: "cost model config must be a .json file",
        });
    }
    Ok(())
}

impl ConfigFS for CostModel {
    type OutType = Self;
    async fn read(path: &str) -> Result<Self::OutType> {
        check_json_path(path)?;
        let mut file = File::open(path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;
        let model: Self::OutType = serde_json::from_str(&contents)?;
        model.validate()?;
        tracing::debug!(path, ?model, "cost model loaded");
        Ok(model)
    }
    async fn save(&self, path: &str) -> Result<()> {
        check_json_path(path)?;
        let pretty_json = serde_json::to_string_pretty(self)?;

        let data_file = File::create(path).await?;
        let mut data_file = BufWriter::new(data_file);
        data_file.write_all(pretty_json.as_bytes()).await?;
        data_file.flush().await?;
        Ok(())
    }
}
