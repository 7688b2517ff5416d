use futures::future::try_join_all;
use payloads::{
    APIClient, ClientError, MediaClient, UserId, ValidationErrors, VehicleFields,
    requests::CreateVehicle,
};
use std::rc::Rc;

/// Something that can be sent to the media host as a file.
#[allow(async_fn_in_trait)]
pub trait UploadSource {
    fn file_name(&self) -> String;

    async fn read(&self) -> Result<Vec<u8>, UploadError>;
}

impl<T: UploadSource> UploadSource for Rc<T> {
    fn file_name(&self) -> String {
        T::file_name(self)
    }

    async fn read(&self) -> Result<Vec<u8>, UploadError> {
        T::read(self).await
    }
}

/// Stores one image and returns its public URL.
#[allow(async_fn_in_trait)]
pub trait MediaHost<T> {
    async fn upload(&self, image: &T) -> Result<String, UploadError>;
}

impl<T: UploadSource> MediaHost<T> for MediaClient {
    async fn upload(&self, image: &T) -> Result<String, UploadError> {
        let data = image.read().await?;
        Ok(self.upload_image(&image.file_name(), data).await?)
    }
}

/// Persists a finished vehicle record.
#[allow(async_fn_in_trait)]
pub trait VehicleBackend {
    async fn create_vehicle(
        &self,
        record: &CreateVehicle,
    ) -> Result<(), ClientError>;
}

impl VehicleBackend for APIClient {
    async fn create_vehicle(
        &self,
        record: &CreateVehicle,
    ) -> Result<(), ClientError> {
        APIClient::create_vehicle(self, record).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Could not read {0}")]
    Read(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Why a submit attempt did not produce a listing. `Display` is the text
/// shown in the error banner.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please correct the highlighted fields")]
    Invalid(ValidationErrors),
    #[error("You must be signed in to submit a vehicle")]
    MissingSession,
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Backend(ClientError),
}

/// Upload every image concurrently. All must succeed; the first failure
/// fails the batch. URLs come back in the order of `images`, whatever order
/// the uploads finish in.
pub async fn upload_all<T, M: MediaHost<T>>(
    media: &M,
    images: &[T],
) -> Result<Vec<String>, UploadError> {
    let uploads = images.iter().enumerate().map(|(index, image)| async move {
        let url = media.upload(image).await?;
        tracing::debug!(index, %url, "Image uploaded");
        Ok::<_, UploadError>(url)
    });
    try_join_all(uploads).await
}

/// A validated snapshot of the form, ready to be sent.
#[derive(Debug, Clone)]
pub struct PendingSubmission<T> {
    pub fields: VehicleFields,
    pub images: Vec<T>,
    pub user_id: UserId,
}

impl<T> PendingSubmission<T> {
    /// Upload the images, then post the record built from their URLs.
    pub async fn run<M, B>(self, media: &M, backend: &B) -> Result<(), SubmitError>
    where
        M: MediaHost<T>,
        B: VehicleBackend,
    {
        tracing::info!(images = self.images.len(), "Submitting vehicle");

        let image_urls = upload_all(media, &self.images).await?;
        let record = CreateVehicle {
            fields: self.fields,
            images: image_urls,
            user_id: self.user_id,
        };

        if let Err(e) = backend.create_vehicle(&record).await {
            tracing::warn!("Backend rejected vehicle: {e}");
            if !record.images.is_empty() {
                // No delete call: removing hosted images needs a signed
                // credential this client does not hold.
                tracing::warn!(
                    orphaned = ?record.images,
                    "Uploaded images are not referenced by any listing"
                );
            }
            return Err(SubmitError::Backend(e));
        }

        tracing::info!("Vehicle submitted");
        Ok(())
    }
}
