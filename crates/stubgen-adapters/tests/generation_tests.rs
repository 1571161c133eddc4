//! End-to-end generation against real and in-memory filesystems.

use std::fs;
use std::path::Path;

use stubgen_adapters::{
    JsonFilePostStore, JsonPostSource, JsonRows, LocalFilesystem, MemoryFilesystem, MemoryPostStore,
};
use stubgen_core::prelude::*;
use tempfile::TempDir;

const PROVIDER: &str = r#"<?php

namespace App\Providers;

use Illuminate\Support\ServiceProvider;

class AppServiceProvider extends ServiceProvider
{
    public function register(): void
    {
        //
    }

    public function boot(): void
    {
        //
    }
}
"#;

const INVOICE_FILES: [&str; 8] = [
    "Repositories/Interface/IInvoice.php",
    "Repositories/Implementation/InvoiceRepository.php",
    "Services/InvoiceService.php",
    "Http/Controllers/InvoiceController.php",
    "Http/Resources/InvoiceResource.php",
    "Models/Invoice.php",
    "Http/Requests/StoreInvoiceRequest.php",
    "Http/Requests/UpdateInvoiceRequest.php",
];

fn laravel_app() -> TempDir {
    let temp = TempDir::new().unwrap();
    let providers = temp.path().join("app/Providers");
    fs::create_dir_all(&providers).unwrap();
    fs::write(providers.join("AppServiceProvider.php"), PROVIDER).unwrap();
    temp
}

fn local_service(root: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        GeneratorSettings::new(root.join("app")),
    )
}

#[test]
fn invoice_scaffold_on_disk() {
    let temp = laravel_app();
    let app = temp.path().join("app");

    let report = local_service(temp.path()).generate(&EntityName::new("Invoice"));

    assert_eq!(report.created(), 8);
    assert!(!report.has_errors());
    for rel in INVOICE_FILES {
        assert!(app.join(rel).is_file(), "{rel} missing");
    }

    let controller = fs::read_to_string(app.join("Http/Controllers/InvoiceController.php")).unwrap();
    assert!(controller.contains("use App\\Services\\InvoiceService;"));

    let provider = fs::read_to_string(app.join("Providers/AppServiceProvider.php")).unwrap();
    assert!(provider.contains(
        "use Illuminate\\Support\\ServiceProvider;\n\
         use App\\Repositories\\Interface\\IInvoice;\n\
         use App\\Repositories\\Implementation\\InvoiceRepository;"
    ));
    assert!(provider.contains("$this->app->bind(IInvoice::class, InvoiceRepository::class);"));
}

#[test]
fn rerun_skips_everything_and_keeps_provider() {
    let temp = laravel_app();
    let service = local_service(temp.path());
    let provider_path = temp.path().join("app/Providers/AppServiceProvider.php");

    service.generate(&EntityName::new("Invoice"));
    let after_first = fs::read_to_string(&provider_path).unwrap();

    let second = service.generate(&EntityName::new("Invoice"));
    let after_second = fs::read_to_string(&provider_path).unwrap();

    assert_eq!(second.skipped(), 8);
    assert_eq!(second.registration, RegistrationOutcome::AlreadyRegistered);
    assert_eq!(after_first, after_second);
}

#[test]
fn existing_file_is_not_overwritten() {
    let temp = laravel_app();
    let model = temp.path().join("app/Models/Invoice.php");
    fs::create_dir_all(model.parent().unwrap()).unwrap();
    fs::write(&model, "<?php // hand written").unwrap();

    let report = local_service(temp.path()).generate(&EntityName::new("Invoice"));

    assert_eq!(report.created(), 7);
    assert_eq!(report.skipped(), 1);
    assert_eq!(fs::read_to_string(&model).unwrap(), "<?php // hand written");
}

#[test]
fn missing_provider_still_writes_files() {
    let temp = TempDir::new().unwrap();

    let report = local_service(temp.path()).generate(&EntityName::new("Invoice"));

    assert_eq!(report.created(), 8);
    assert!(matches!(
        report.registration,
        RegistrationOutcome::ProviderMissing { .. }
    ));
    assert!(report.has_errors());
}

#[test]
fn two_names_make_sixteen_files_and_two_bindings() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.seed_file("app/Providers/AppServiceProvider.php", PROVIDER);

    let service = ScaffoldService::new(Box::new(fs_mem.clone()), GeneratorSettings::new("app"));
    let reports = service.generate_all(&[EntityName::new("Order"), EntityName::new("Customer")]);

    assert_eq!(reports.iter().map(GenerationReport::created).sum::<usize>(), 16);
    // 16 generated plus the provider.
    assert_eq!(fs_mem.list_files().len(), 17);

    let provider = fs_mem
        .read_file(Path::new("app/Providers/AppServiceProvider.php"))
        .unwrap();
    assert!(provider.contains("IOrder::class, OrderRepository::class"));
    assert!(provider.contains("ICustomer::class, CustomerRepository::class"));
}

#[test]
fn read_only_directory_fails_only_its_files() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.seed_file("app/Providers/AppServiceProvider.php", PROVIDER);
    fs_mem.set_read_only("app/Http/Requests");

    let service = ScaffoldService::new(Box::new(fs_mem.clone()), GeneratorSettings::new("app"));
    let report = service.generate(&EntityName::new("Invoice"));

    assert_eq!(report.created(), 6);
    assert_eq!(report.failed(), 2);
    assert!(matches!(report.registration, RegistrationOutcome::Patched { .. }));
}

#[test]
fn read_only_provider_is_a_registration_failure() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.seed_file("app/Providers/AppServiceProvider.php", PROVIDER);
    fs_mem.set_read_only("app/Providers/AppServiceProvider.php");

    let service = ScaffoldService::new(Box::new(fs_mem), GeneratorSettings::new("app"));
    let report = service.generate(&EntityName::new("Invoice"));

    assert_eq!(report.created(), 8);
    assert!(matches!(report.registration, RegistrationOutcome::Failed { .. }));
}

#[test]
fn spreadsheet_rows_round_through_store() {
    let store = MemoryPostStore::new();
    let service = PostService::new(Box::new(store.clone()));

    let rows = vec![vec!["Hello".to_string(), "World".to_string()]];
    let upload = UploadedFile::new("posts.xlsx");
    assert_eq!(service.import_upload(Some(&upload), || Ok(rows.clone())).unwrap(), 1);

    assert_eq!(
        service.export_rows().unwrap(),
        vec![vec!["1".to_string(), "Hello".into(), "World".into()]]
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn nested_name_writes_every_file() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.seed_file("app/Providers/AppServiceProvider.php", PROVIDER);

    let service = ScaffoldService::new(Box::new(fs_mem.clone()), GeneratorSettings::new("app"));
    let report = service.generate(&EntityName::new("Admin/User"));

    assert_eq!(report.created(), 8);
    assert_eq!(report.failed(), 0);
    let store = fs_mem
        .read_file(Path::new("app/Http/Requests/StoreAdmin/UserRequest.php"))
        .unwrap();
    assert!(store.contains("public function rules()"));
}

#[test]
fn fetched_and_imported_posts_persist_on_disk() {
    let temp = TempDir::new().unwrap();
    let store_path = temp.path().join("storage/posts.json");
    let payload = temp.path().join("posts.json");
    let rows = temp.path().join("rows.json");
    fs::write(
        &payload,
        r#"[{"userId": 1, "id": 1, "title": "remote", "body": "r"}]"#,
    )
    .unwrap();
    fs::write(&rows, r#"[["Hello", "World"]]"#).unwrap();

    let service = PostService::new(Box::new(JsonFilePostStore::new(&store_path)));
    assert_eq!(service.fetch_remote(&JsonPostSource::new(&payload)).unwrap(), 1);

    let upload = UploadedFile::new("posts.xlsx");
    let imported = service
        .import_upload(Some(&upload), || JsonRows::new(&rows).read())
        .unwrap();
    assert_eq!(imported, 1);

    let reopened = PostService::new(Box::new(JsonFilePostStore::new(&store_path)));
    assert_eq!(
        reopened.export_rows().unwrap(),
        vec![
            vec!["1".to_string(), "remote".into(), "r".into()],
            vec!["2".to_string(), "Hello".into(), "World".into()],
        ]
    );
}
