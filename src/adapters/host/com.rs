//! COM automation adapter for RISA 3D
//!
//! Late-bound IDispatch automation against the host's registered ProgID
//! (`RISA3D.Application` by default). Calls are name-resolved with
//! `GetIDsOfNames` and dispatched with `Invoke`, matching how the host's
//! automation surface is documented for scripting clients.
//!
//! The adapter initializes a single-threaded apartment on the calling
//! thread; risaplot runs on a current-thread runtime so every dispatch
//! happens on that thread.

use crate::adapters::host::traits::{HostApplication, HostModel, HostSession};
use crate::domain::load_case::{LoadCase, LoadCaseCategory};
use crate::domain::{HostError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use windows::core::{GUID, BSTR, PCWSTR, VARIANT};
use windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, CoInitializeEx, CoUninitialize, IDispatch,
    CLSCTX_LOCAL_SERVER, COINIT_APARTMENTTHREADED, DISPATCH_FLAGS, DISPATCH_METHOD,
    DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT, DISPPARAMS, EXCEPINFO,
};

// Named-argument dispid for property puts.
const DISPID_PROPERTYPUT: i32 = -3;

/// COM-backed implementation of [`HostApplication`]
pub struct ComHostApplication {
    prog_id: String,
}

impl ComHostApplication {
    /// Creates an adapter for the given ProgID
    pub fn new(prog_id: String) -> Self {
        Self { prog_id }
    }
}

#[async_trait(?Send)]
impl HostApplication for ComHostApplication {
    async fn connect(&self) -> Result<Box<dyn HostSession>> {
        let session = ComSession::connect(&self.prog_id)?;
        tracing::info!(prog_id = %self.prog_id, "Connected to RISA 3D");
        Ok(Box::new(session))
    }
}

/// Scoped COM apartment for the connecting thread
struct Apartment;

impl Apartment {
    fn enter() -> std::result::Result<Self, HostError> {
        // S_FALSE (already initialized) is fine.
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| HostError::ConnectionFailed(format!("CoInitializeEx: {}", e.message())))?;
        Ok(Self)
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

/// Thin helper around a late-bound IDispatch object
struct Dispatch(IDispatch);

impl Dispatch {
    fn dispid(&self, name: &str) -> std::result::Result<i32, HostError> {
        let wide: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        let names = [PCWSTR(wide.as_ptr())];
        let mut dispid = 0i32;
        unsafe {
            self.0
                .GetIDsOfNames(&GUID::zeroed(), names.as_ptr(), 1, 0, &mut dispid)
        }
        .map_err(|e| HostError::call(name, e.message()))?;
        Ok(dispid)
    }

    fn invoke(
        &self,
        name: &str,
        flags: DISPATCH_FLAGS,
        args: &[VARIANT],
    ) -> std::result::Result<VARIANT, HostError> {
        let dispid = self.dispid(name)?;

        // IDispatch expects arguments in reverse order.
        let mut rgvarg: Vec<VARIANT> = args.iter().rev().cloned().collect();
        let mut named_arg = DISPID_PROPERTYPUT;
        let mut params = DISPPARAMS {
            rgvarg: rgvarg.as_mut_ptr(),
            rgdispidNamedArgs: std::ptr::null_mut(),
            cArgs: rgvarg.len() as u32,
            cNamedArgs: 0,
        };
        if flags == DISPATCH_PROPERTYPUT {
            params.rgdispidNamedArgs = &mut named_arg;
            params.cNamedArgs = 1;
        }

        let mut result = VARIANT::default();
        let mut excep = EXCEPINFO::default();
        unsafe {
            self.0.Invoke(
                dispid,
                &GUID::zeroed(),
                0,
                flags,
                &params,
                Some(&mut result as *mut VARIANT),
                Some(&mut excep as *mut EXCEPINFO),
                None,
            )
        }
        .map_err(|e| {
            let description = excep.bstrDescription.to_string();
            let message = if description.is_empty() {
                e.message()
            } else {
                description
            };
            HostError::call(name, message)
        })?;

        Ok(result)
    }

    fn get(&self, name: &str) -> std::result::Result<VARIANT, HostError> {
        self.invoke(name, DISPATCH_PROPERTYGET, &[])
    }

    fn put(&self, name: &str, value: VARIANT) -> std::result::Result<(), HostError> {
        self.invoke(name, DISPATCH_PROPERTYPUT, &[value])?;
        Ok(())
    }

    fn call(&self, name: &str, args: &[VARIANT]) -> std::result::Result<VARIANT, HostError> {
        self.invoke(name, DISPATCH_METHOD, args)
    }
}

/// Live session with the host application
pub struct ComSession {
    app: Dispatch,
    apartment: Arc<Apartment>,
}

impl ComSession {
    fn connect(prog_id: &str) -> std::result::Result<Self, HostError> {
        let apartment = Arc::new(Apartment::enter()?);

        let wide: Vec<u16> = prog_id.encode_utf16().chain(std::iter::once(0)).collect();
        let clsid = unsafe { CLSIDFromProgID(PCWSTR(wide.as_ptr())) }.map_err(|e| {
            HostError::NotRunning(format!("ProgID '{prog_id}' is not registered: {}", e.message()))
        })?;

        let app: IDispatch = unsafe { CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER) }
            .map_err(|e| HostError::ConnectionFailed(e.message()))?;

        Ok(Self {
            app: Dispatch(app),
            apartment,
        })
    }
}

#[async_trait(?Send)]
impl HostSession for ComSession {
    async fn active_model(&self) -> Result<Option<Arc<dyn HostModel>>> {
        let value = self.app.get("ActiveModel")?;
        match IDispatch::try_from(&value) {
            Ok(model) => Ok(Some(Arc::new(ComModel {
                model: Dispatch(model),
                _apartment: self.apartment.clone(),
            }))),
            // VT_EMPTY / VT_NULL: no model is open.
            Err(_) => Ok(None),
        }
    }

    async fn disconnect(self: Box<Self>) -> Result<()> {
        // Releasing the IDispatch reference drops the remote reference;
        // the apartment is uninitialized once the last model handle goes.
        drop(self);
        tracing::info!("Connection to RISA 3D closed");
        Ok(())
    }
}

/// Handle to the open model
struct ComModel {
    model: Dispatch,
    _apartment: Arc<Apartment>,
}

#[async_trait(?Send)]
impl HostModel for ComModel {
    fn file_name(&self) -> String {
        self.model
            .get("FileName")
            .ok()
            .and_then(|v| BSTR::try_from(&v).ok())
            .map(|b| b.to_string())
            .unwrap_or_default()
    }

    async fn load_cases(&self) -> Result<Vec<LoadCase>> {
        let collection = self.model.call("GetLoadCases", &[])?;
        let collection = Dispatch(
            IDispatch::try_from(&collection)
                .map_err(|e| HostError::InvalidResponse(format!("GetLoadCases: {}", e.message())))?,
        );

        let count = i32::try_from(&collection.get("Count")?)
            .map_err(|e| HostError::InvalidResponse(format!("Count: {}", e.message())))?;

        let mut cases = Vec::with_capacity(count.max(0) as usize);
        // OLE collections are 1-based.
        for index in 1..=count {
            let item = collection.call("Item", &[VARIANT::from(index)])?;
            let item = Dispatch(
                IDispatch::try_from(&item)
                    .map_err(|e| HostError::InvalidResponse(format!("Item: {}", e.message())))?,
            );

            let label = BSTR::try_from(&item.get("Label")?)
                .map_err(|e| HostError::InvalidResponse(format!("Label: {}", e.message())))?
                .to_string();
            let code = i32::try_from(&item.get("Type")?)
                .map_err(|e| HostError::InvalidResponse(format!("Type: {}", e.message())))?;

            cases.push(LoadCase::new(label, LoadCaseCategory::from_host_code(code)));
        }

        Ok(cases)
    }

    async fn set_isometric_view(&self) -> Result<()> {
        self.model.call("SetIsometricView", &[])?;
        Ok(())
    }

    async fn set_load_overlay(&self, visible: bool) -> Result<()> {
        self.model.put("ShowAppliedLoads", VARIANT::from(visible))?;
        Ok(())
    }

    async fn activate_load_case(&self, label: &str) -> Result<()> {
        self.model
            .call("SetCurrentLoadCase", &[VARIANT::from(BSTR::from(label))])?;
        Ok(())
    }

    async fn export_view(&self, path: &Path) -> Result<()> {
        let target = path.to_string_lossy();
        self.model
            .call("ExportView", &[VARIANT::from(BSTR::from(target.as_ref()))])?;
        Ok(())
    }
}
