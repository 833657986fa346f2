//! Template file contents

/// HTTP controller
///
/// Imports `{{ClassName}}Request`, which this tool never generates; the
/// application is expected to add it.
pub const CONTROLLER: &str = r"<?php

namespace App\Http\Controllers;

use App\Http\Requests\{{ClassName}}Request;
use App\Models\{{ClassName}};
use Illuminate\Http\Request;

class {{ClassName}}Controller extends Controller
{
    public function index()
    {
        $data = {{ClassName}}::all();
        return view('{{ClassName}}.index', compact('data'));
    }

    // Implement other CRUD methods here...
}
";

/// Eloquent model with an empty body
pub const MODEL: &str = r"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Model;

class {{ClassName}} extends Model
{
    // Define model properties and relationships here
}
";

/// Index view stub
pub const VIEW_INDEX: &str = "<!-- index view for {{ClassName}} CRUD -->";

/// Create view stub
pub const VIEW_CREATE: &str = "<!-- create view for {{ClassName}} CRUD -->";

/// Edit view stub
pub const VIEW_EDIT: &str = "<!-- edit view for {{ClassName}} CRUD -->";

/// Show view stub
pub const VIEW_SHOW: &str = "<!-- show view for {{ClassName}} CRUD -->";

/// Schema migration creating `{{PluralLower}}` with id and timestamps only
pub const MIGRATION: &str = r"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up()
    {
        Schema::create('{{PluralLower}}', function (Blueprint $table) {
            $table->id();
            // Define table columns here
            $table->timestamps();
        });
    }

    public function down()
    {
        Schema::dropIfExists('{{PluralLower}}');
    }
};
";

/// Resource route line appended to the routes file
pub const ROUTE_ENTRY: &str =
    "\nRoute::resource('{{RouteSegment}}', {{ClassName}}Controller::class);";
