//! Fixed PHP skeletons, one per [`TemplateKind`].
//!
//! There is no template language here: each skeleton is a `format!` over the
//! entity name. The name is interpolated wherever the class, the model, the
//! namespace reference or the injected field appears. Field names reuse the
//! raw name (`$Invoicerepo`, `$Invoiceservice`), which reads oddly but parses.

use crate::domain::{entities::EntityName, value_objects::TemplateKind};

/// Render the skeleton for `kind`.
pub fn render(kind: TemplateKind, name: &EntityName) -> String {
    let name = name.as_str();
    match kind {
        TemplateKind::RepositoryInterface => repository_interface(name),
        TemplateKind::Repository => repository(name),
        TemplateKind::ServiceInterface => service(name),
        TemplateKind::Controller => controller(name),
        TemplateKind::Resource => resource(name),
        TemplateKind::Model => model(name),
        TemplateKind::StoreRequest => store_request(name),
        TemplateKind::UpdateRequest => update_request(name),
    }
}

/// Render for a possibly-unclassified target; `None` for the unknown kind.
pub fn render_opt(kind: Option<TemplateKind>, name: &EntityName) -> Option<String> {
    kind.map(|k| render(k, name))
}

fn repository_interface(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Repositories\Interface;

interface I{name}
{{
    public function get($limit);
    public function show($model);
    public function save($model);
    public function delete($model);
    public function update($model);
    public function search($request, $limit);
}}
"#
    )
}

fn repository(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Repositories\Implementation;

use App\Models\{name};
use App\Repositories\Interface\I{name};

class {name}Repository implements I{name}
{{
    public function get($limit)
    {{
        return {name}::paginate($limit);
    }}

    public function show($model)
    {{
        return {name}::find($model->id);
    }}

    public function save($model)
    {{
        return {name}::create($model);
    }}

    public function delete($model)
    {{
        return $model->delete();
    }}

    public function search($request, $limit)
    {{
        return {name}::whereAny([], "LIKE", "%" . $request . "%")->paginate($limit);
    }}

    public function update($model)
    {{
        return $model->save();
    }}
}}
"#
    )
}

fn service(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Services;

use App\Repositories\Interface\I{name};
use App\Traits\ResponseTrait;
use Illuminate\Support\Facades\Log;
use App\Http\Resources\{name}Resource;

class {name}Service
{{
    private I{name} ${name}repo;

    public function __construct(I{name} ${name}repo)
    {{
        $this->{name}repo = ${name}repo;
    }}

    // Add methods to use the repository here
}}
"#
    )
}

fn controller(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Http\Controllers;

use App\Http\Controllers\Controller;
use App\Models\{name};
use App\Services\{name}Service;
use Illuminate\Http\Request;

class {name}Controller extends Controller
{{
    private {name}Service ${name}service;

    public function __construct({name}Service ${name}service)
    {{
        $this->{name}service = ${name}service;
    }}

    // Controller methods to call the service methods here
}}
"#
    )
}

fn resource(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Http\Resources;

use Illuminate\Http\Request;
use Illuminate\Http\Resources\Json\JsonResource;

class {name}Resource extends JsonResource
{{
    public function toArray(Request $request): array
    {{
        return [
        ];
    }}
}}
"#
    )
}

fn model(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {name} extends Model
{{
    protected $fillable = [];
}}
"#
    )
}

fn store_request(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class Store{name}Request extends FormRequest
{{
    public function authorize()
    {{
        return true;
    }}

    public function rules()
    {{
        return [

        ];
    }}
}}
"#
    )
}

fn update_request(name: &str) -> String {
    format!(
        r#"<?php

namespace App\Http\Requests;

use App\Models\{name};
use Illuminate\Support\Facades\Auth;
use Illuminate\Support\Facades\Log;
use Illuminate\Foundation\Http\FormRequest;

class Update{name}Request extends FormRequest
{{
    public function authorize()
    {{
        return true;
    }}

    public function rules()
    {{
        return [

        ];
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> EntityName {
        EntityName::new("Invoice")
    }

    #[test]
    fn every_kind_renders_php() {
        for kind in TemplateKind::ALL {
            let out = render(kind, &invoice());
            assert!(out.starts_with("<?php\n"), "{kind} has no open tag");
            assert!(out.contains("Invoice"), "{kind} ignores the name");
            assert_eq!(
                out.matches('{').count(),
                out.matches('}').count(),
                "{kind} braces unbalanced"
            );
        }
    }

    #[test]
    fn controller_depends_on_service() {
        let out = render(TemplateKind::Controller, &invoice());
        assert!(out.contains("class InvoiceController extends Controller"));
        assert!(out.contains("use App\\Services\\InvoiceService;"));
        assert!(out.contains("public function __construct(InvoiceService $Invoiceservice)"));
    }

    #[test]
    fn repository_implements_interface() {
        let out = render(TemplateKind::Repository, &invoice());
        assert!(out.contains("class InvoiceRepository implements IInvoice"));
        assert!(out.contains("use App\\Models\\Invoice;"));
        assert!(out.contains("return Invoice::paginate($limit);"));
    }

    #[test]
    fn service_injects_repository_interface() {
        let out = render(TemplateKind::ServiceInterface, &invoice());
        assert!(out.contains("class InvoiceService"));
        assert!(out.contains("private IInvoice $Invoicerepo;"));
        assert!(out.contains("$this->Invoicerepo = $Invoicerepo;"));
    }

    #[test]
    fn request_classes_are_prefixed() {
        assert!(render(TemplateKind::StoreRequest, &invoice())
            .contains("class StoreInvoiceRequest extends FormRequest"));
        assert!(render(TemplateKind::UpdateRequest, &invoice())
            .contains("class UpdateInvoiceRequest extends FormRequest"));
    }

    #[test]
    fn model_is_well_formed() {
        let out = render(TemplateKind::Model, &invoice());
        assert!(out.contains("class Invoice extends Model"));
        assert!(out.contains("protected $fillable = [];"));
    }

    #[test]
    fn unknown_kind_renders_nothing() {
        assert_eq!(render_opt(None, &invoice()), None);
        assert!(render_opt(Some(TemplateKind::Resource), &invoice()).is_some());
    }
}
