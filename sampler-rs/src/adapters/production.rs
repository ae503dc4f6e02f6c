// Device motion acquisition from a phone running the phyphox app, through its REST API.
// Each tick asks for the latest value of every acceleration, rotation rate and attitude buffer.

use async_trait::async_trait;
use serde_json::Value;

use common::DeviceMotion;

use crate::config::{PhyphoxConfig, PhyphoxVariables};
use crate::constants::{CLEAR_CMD, CONFIG_CMD, CONTROL_CMD, GET_CMD, START_CMD, STOP_CMD};
use crate::errors::SamplerError;
use crate::helpers;
use crate::http_client::HttpClient;
use crate::ports::MotionPort;

pub struct PhyphoxMotion {
    client: HttpClient,
    tag: String,
    variables: PhyphoxVariables,
    query: String,
}

impl PhyphoxMotion {
    /// Creates a new `PhyphoxMotion` instance with the specified configuration.
    /// Returns a ClientBuild error if the Http client cannot be created.
    pub fn new(config: &PhyphoxConfig) -> Result<Self, SamplerError> {
        let client = HttpClient::new(&config.base_url)?;
        let query = helpers::build_query(&config.variables.all());

        Ok(Self {
            client,
            tag: config.tag.clone(),
            variables: config.variables.clone(),
            query,
        })
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, SamplerError> {
        self.client.fetch_json(path).await
    }

    /// Sends a control command to the phyphox server.
    async fn control(&self, command: &str) -> Result<(), SamplerError> {
        self.fetch_json(&format!("{CONTROL_CMD}{}", command))
            .await?;
        Ok(())
    }

    async fn clear_cmd(&self) -> Result<(), SamplerError> {
        log::info!("Clearing data...");
        self.control(CLEAR_CMD).await
    }

    async fn start_cmd(&self) -> Result<(), SamplerError> {
        log::info!("Starting recording...");
        self.control(START_CMD).await
    }

    async fn stop_cmd(&self) -> Result<(), SamplerError> {
        log::info!("Stopping recording...");
        self.control(STOP_CMD).await
    }

    /// Buffer names exposed by the running experiment
    async fn get_available_buffers(&self) -> Result<Vec<String>, SamplerError> {
        let config = self.fetch_json(CONFIG_CMD).await?;
        helpers::get_buffer_names(&config)
    }
}

#[async_trait]
impl MotionPort for PhyphoxMotion {
    /// True if the experiment running on the phone exposes every configured buffer.
    async fn is_available(&self) -> bool {
        match self.get_available_buffers().await {
            Ok(buffers) => {
                let missing: Vec<&str> = self
                    .variables
                    .all()
                    .into_iter()
                    .filter(|var| !buffers.iter().any(|b| b == var))
                    .collect();
                if !missing.is_empty() {
                    log::warn!("Missing phyphox buffers: {}", missing.join(", "));
                }
                missing.is_empty()
            }
            Err(e) => {
                log::warn!("Phyphox not reachable: {}", e);
                false
            }
        }
    }

    async fn begin_updates(&self) -> Result<(), SamplerError> {
        self.clear_cmd().await?;
        self.start_cmd().await
    }

    /// # Errors
    /// - FetchData if there is an error connecting to REST API
    /// - IncorrectDataFormat if the data retrieved from the API has an unexpected format
    async fn read_motion(&self) -> Result<Option<DeviceMotion>, SamplerError> {
        let data = self.fetch_json(&format!("{GET_CMD}{}", self.query)).await?;
        if !helpers::get_status_from_json(&data)? {
            log::debug!("Phyphox is not measuring");
            return Ok(None);
        }
        let row = helpers::parse_latest(&data, &self.variables.all())?;
        Ok(row.map(DeviceMotion::from_row))
    }

    async fn end_updates(&self) -> Result<(), SamplerError> {
        self.stop_cmd().await
    }

    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }
}
