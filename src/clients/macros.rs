/// Declares a resource client: the wrapper struct, `new`, a `create_<name>` /
/// `update_<name>` pair and the [`ActorClient`](super::ActorClient) impl.
macro_rules! impl_resource_client {
    ($(#[$meta:meta])* $client:ident, $entity:ty, $error:ident, $name:ident) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone)]
            pub struct $client {
                inner: $crate::framework::ResourceClient<$entity>,
            }

            impl $client {
                pub fn new(inner: $crate::framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<create_ $name>](
                    &self,
                    params: <$entity as $crate::framework::ActorEntity>::Create,
                ) -> Result<<$entity as $crate::framework::ActorEntity>::Id, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .create(params)
                        .await
                        .map_err(<Self as $crate::clients::ActorClient<$entity>>::map_error)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $name>](
                    &self,
                    id: <$entity as $crate::framework::ActorEntity>::Id,
                    update: <$entity as $crate::framework::ActorEntity>::Update,
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .update(id, update)
                        .await
                        .map_err(<Self as $crate::clients::ActorClient<$entity>>::map_error)
                }
            }

            #[async_trait::async_trait]
            impl $crate::clients::ActorClient<$entity> for $client {
                type Error = $error;

                fn inner(&self) -> &$crate::framework::ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: $crate::framework::FrameworkError) -> Self::Error {
                    $crate::clients::map_framework_error(e, $error::NotFound)
                }
            }
        }
    };
}
