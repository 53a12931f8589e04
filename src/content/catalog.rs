//! Literal teaching content: texts, small datasets, exercises and questions.

use super::model::{
    Dataset, Lesson, PairedDataset, QuizQuestion, RegionRecord, Resource, TheoryBlock, Topic,
};
use super::practice::{ExerciseKind, PracticeExercise};

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

/// Ages of patients seen at an outpatient clinic in one morning.
pub fn patient_ages() -> Dataset {
    Dataset::new(
        "Edad de pacientes en consulta externa",
        "años",
        &[23.0, 35.0, 35.0, 41.0, 47.0, 52.0, 35.0, 60.0, 28.0, 44.0, 39.0, 71.0],
    )
}

/// Systolic pressure of two groups, before and after a lifestyle program.
pub fn systolic_groups() -> (Dataset, Dataset) {
    (
        Dataset::new(
            "Grupo control",
            "mmHg",
            &[138.0, 142.0, 135.0, 150.0, 145.0, 139.0, 147.0, 141.0],
        ),
        Dataset::new(
            "Grupo intervención",
            "mmHg",
            &[128.0, 131.0, 126.0, 135.0, 129.0, 133.0, 124.0, 130.0],
        ),
    )
}

/// Age against systolic pressure.
pub fn age_vs_pressure() -> PairedDataset {
    PairedDataset {
        x_label: "Edad (años)".to_string(),
        y_label: "Presión sistólica (mmHg)".to_string(),
        xs: vec![25.0, 32.0, 38.0, 41.0, 47.0, 53.0, 58.0, 62.0, 67.0, 73.0],
        ys: vec![112.0, 118.0, 117.0, 125.0, 128.0, 134.0, 133.0, 141.0, 144.0, 150.0],
    }
}

/// New confirmed cases per day of a food-borne outbreak.
pub fn outbreak_daily_cases() -> Vec<f64> {
    vec![
        1.0, 2.0, 4.0, 9.0, 15.0, 24.0, 31.0, 28.0, 22.0, 16.0, 10.0, 7.0, 4.0, 2.0, 1.0,
    ]
}

/// Population at risk of the outbreak above.
pub const OUTBREAK_POPULATION: f64 = 1_200.0;

/// Regional surveillance cut used by the dashboard.
pub fn regions() -> Vec<RegionRecord> {
    vec![
        RegionRecord {
            region: "Norte",
            population: 1_028_736.0,
            cases: 2_450.0,
            new_cases: 310.0,
            deaths: 49.0,
        },
        RegionRecord {
            region: "Centro",
            population: 2_315_400.0,
            cases: 6_120.0,
            new_cases: 802.0,
            deaths: 98.0,
        },
        RegionRecord {
            region: "Sur",
            population: 684_210.0,
            cases: 1_870.0,
            new_cases: 145.0,
            deaths: 61.0,
        },
        RegionRecord {
            region: "Oriente",
            population: 412_950.0,
            cases: 730.0,
            new_cases: 96.0,
            deaths: 9.0,
        },
        RegionRecord {
            region: "Occidente",
            population: 957_300.0,
            cases: 3_015.0,
            new_cases: 420.0,
            deaths: 72.0,
        },
    ]
}

// ---------------------------------------------------------------------------
// Lessons
// ---------------------------------------------------------------------------

/// Static content for a topic.
pub fn lesson(topic: Topic) -> Lesson {
    match topic {
        Topic::CentralTendency => central_tendency(),
        Topic::Dispersion => dispersion(),
        Topic::Correlation => correlation(),
        Topic::Epidemiology => epidemiology(),
        Topic::EpidemicCurve => epidemic_curve(),
        Topic::Dashboard => dashboard(),
    }
}

fn shared_resources() -> Vec<Resource> {
    vec![
        Resource {
            title: "OPS – Módulos de principios de epidemiología para el control de enfermedades",
            description: "Material de referencia de la Organización Panamericana de la Salud.",
            url: Some("https://iris.paho.org/"),
        },
        Resource {
            title: "Modelo C(H)ANGE",
            description: "Combinatoria, Álgebra, Números, Geometría y Estadística: marco que organiza las actividades de este objeto.",
            url: None,
        },
    ]
}

fn central_tendency() -> Lesson {
    let ages = patient_ages().values;
    Lesson {
        topic: Topic::CentralTendency,
        objective: "Calcular e interpretar la media, la mediana y la moda de datos de salud.",
        intro: vec![
            "Las medidas de tendencia central resumen un conjunto de datos con un único valor típico.",
            "En salud se usan para describir, por ejemplo, la edad promedio de los pacientes o la estancia hospitalaria habitual.",
        ],
        theory: vec![
            TheoryBlock {
                title: "Media aritmética",
                body: "Suma de todos los valores dividida por el número de observaciones. Es sensible a valores extremos.",
                formula: Some("x̄ = Σxᵢ / n"),
            },
            TheoryBlock {
                title: "Mediana",
                body: "Valor que deja el 50 % de los datos ordenados por debajo. Con n par es el promedio de los dos valores centrales.",
                formula: Some("Me = x₍ₙ₊₁₎/₂  (n impar)"),
            },
            TheoryBlock {
                title: "Moda",
                body: "Valor más frecuente. Puede haber varias modas; si todos los valores se repiten igual, no hay moda.",
                formula: None,
            },
        ],
        practice: vec![
            PracticeExercise::new(
                "Calcule la media de las edades: 23, 35, 35, 41, 47, 52, 35, 60, 28, 44, 39, 71",
                ExerciseKind::Mean(ages.clone()),
                0.05,
                "Sume las 12 edades y divida entre 12.",
            ),
            PracticeExercise::new(
                "Calcule la mediana de las mismas edades",
                ExerciseKind::Median(ages),
                0.05,
                "Ordene los datos; con n = 12 promedie las posiciones 6 y 7.",
            ),
        ],
        quiz: vec![
            QuizQuestion::new(
                "¿Qué medida es más afectada por un valor extremo?",
                &["La mediana", "La media", "La moda"],
                1,
                "La media usa todos los valores en la suma, por eso un extremo la desplaza.",
            ),
            QuizQuestion::new(
                "La mediana de 3, 8, 5, 10 es:",
                &["6.5", "5", "8", "6.0"],
                0,
                "Ordenados: 3, 5, 8, 10; (5 + 8) / 2 = 6.5.",
            ),
            QuizQuestion::new(
                "En los datos 2, 4, 4, 4, 5, 5, 7, 9 la moda es:",
                &["5", "4", "No hay moda"],
                1,
                "El 4 aparece tres veces, más que cualquier otro valor.",
            ),
        ],
        resources: shared_resources(),
    }
}

fn dispersion() -> Lesson {
    let (control, intervention) = systolic_groups();
    Lesson {
        topic: Topic::Dispersion,
        objective: "Cuantificar la variabilidad de los datos y comparar grupos con el tamaño del efecto.",
        intro: vec![
            "Dos grupos pueden tener la misma media y comportarse de forma muy distinta: la dispersión mide cuánto se alejan los datos de su centro.",
        ],
        theory: vec![
            TheoryBlock {
                title: "Rango",
                body: "Diferencia entre el valor máximo y el mínimo.",
                formula: Some("R = máx − mín"),
            },
            TheoryBlock {
                title: "Varianza muestral",
                body: "Promedio corregido de las desviaciones al cuadrado respecto de la media; se divide por n − 1.",
                formula: Some("s² = Σ(xᵢ − x̄)² / (n − 1)"),
            },
            TheoryBlock {
                title: "Desviación estándar",
                body: "Raíz cuadrada de la varianza; se expresa en las mismas unidades que los datos.",
                formula: Some("s = √s²"),
            },
            TheoryBlock {
                title: "Coeficiente de variación",
                body: "Dispersión relativa a la media, útil para comparar variables con unidades distintas. No está definido si la media es 0.",
                formula: Some("CV = s / x̄ × 100"),
            },
            TheoryBlock {
                title: "d de Cohen",
                body: "Diferencia de medias estandarizada con la desviación estándar combinada. 0.2 pequeño, 0.5 mediano, 0.8 grande.",
                formula: Some("d = (x̄₁ − x̄₂) / s_p"),
            },
        ],
        practice: vec![
            PracticeExercise::new(
                "Calcule la desviación estándar de 2, 4, 4, 4, 5, 5, 7, 9",
                ExerciseKind::StdDev(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
                0.01,
                "La varianza muestral es 32 / 7.",
            ),
            PracticeExercise::new(
                "Calcule el coeficiente de variación (%) de la presión del grupo control",
                ExerciseKind::CoefficientOfVariation(control.values.clone()),
                0.05,
                "Divida la desviación estándar entre la media y multiplique por 100.",
            ),
            PracticeExercise::new(
                "Calcule la d de Cohen entre el grupo control y el grupo intervención",
                ExerciseKind::CohensD {
                    a: control.values,
                    b: intervention.values,
                },
                0.05,
                "Combine las varianzas ponderando por n − 1.",
            ),
        ],
        quiz: vec![
            QuizQuestion::new(
                "¿Por qué la varianza muestral divide por n − 1?",
                &[
                    "Para que el resultado sea entero",
                    "Para corregir el sesgo al estimar la varianza poblacional",
                    "Porque se excluye el valor máximo",
                ],
                1,
                "Usar n − 1 compensa que la media muestral se calcula con los mismos datos.",
            ),
            QuizQuestion::new(
                "Un CV de 5 % frente a uno de 40 % indica:",
                &["Menor variabilidad relativa", "Mayor variabilidad relativa", "Misma variabilidad"],
                0,
                "El CV expresa la dispersión como porcentaje de la media.",
            ),
            QuizQuestion::new(
                "Una d de Cohen de 0.85 se interpreta como un efecto:",
                &["Pequeño", "Mediano", "Grande"],
                2,
                "A partir de 0.8 el efecto se considera grande.",
            ),
        ],
        resources: shared_resources(),
    }
}

fn correlation() -> Lesson {
    let data = age_vs_pressure();
    Lesson {
        topic: Topic::Correlation,
        objective: "Medir la asociación lineal entre dos variables y ajustar una recta de regresión.",
        intro: vec![
            "¿Aumenta la presión arterial con la edad? La correlación mide la fuerza y dirección de esa relación lineal.",
            "Correlación no implica causalidad: una tercera variable puede explicar ambas.",
        ],
        theory: vec![
            TheoryBlock {
                title: "Coeficiente de Pearson",
                body: "Varía entre −1 y 1. El signo indica la dirección y el valor absoluto la fuerza. Si una variable es constante se reporta 0.",
                formula: Some("r = Σ(xᵢ − x̄)(yᵢ − ȳ) / √[Σ(xᵢ − x̄)² · Σ(yᵢ − ȳ)²]"),
            },
            TheoryBlock {
                title: "Regresión lineal simple",
                body: "Recta de mínimos cuadrados que predice Y a partir de X.",
                formula: Some("b = Sxy / Sxx    a = ȳ − b·x̄    ŷ = a + b·x"),
            },
            TheoryBlock {
                title: "Coeficiente de determinación",
                body: "Proporción de la variabilidad de Y explicada por la recta; en regresión simple es r².",
                formula: Some("R² = r²"),
            },
        ],
        practice: vec![
            PracticeExercise::new(
                "Calcule la pendiente de la recta para X = 1, 2, 3 e Y = 2, 4, 6",
                ExerciseKind::Slope {
                    xs: vec![1.0, 2.0, 3.0],
                    ys: vec![2.0, 4.0, 6.0],
                },
                0.001,
                "Cada unidad de X aumenta Y en la misma cantidad.",
            ),
            PracticeExercise::new(
                "Calcule r entre la edad y la presión sistólica del simulador",
                ExerciseKind::Pearson {
                    xs: data.xs,
                    ys: data.ys,
                },
                0.01,
                "Calcule Sxy, Sxx y Syy con las desviaciones respecto de las medias.",
            ),
        ],
        quiz: vec![
            QuizQuestion::new(
                "Un r = −0.9 indica:",
                &[
                    "Correlación negativa muy fuerte",
                    "Ausencia de relación",
                    "Correlación positiva débil",
                ],
                0,
                "El signo negativo indica que cuando X sube, Y baja; |r| ≥ 0.8 es muy fuerte.",
            ),
            QuizQuestion::new(
                "Si R² = 0.64, ¿qué porcentaje de la variabilidad de Y explica el modelo?",
                &["8 %", "64 %", "36 %"],
                1,
                "R² se lee directamente como proporción explicada.",
            ),
            QuizQuestion::new(
                "Una correlación alta entre dos variables demuestra:",
                &["Causalidad", "Asociación lineal", "Que los datos son normales"],
                1,
                "La correlación solo cuantifica asociación, no causa.",
            ),
        ],
        resources: shared_resources(),
    }
}

fn epidemiology() -> Lesson {
    Lesson {
        topic: Topic::Epidemiology,
        objective: "Distinguir y calcular prevalencia, incidencia y letalidad.",
        intro: vec![
            "Las medidas de frecuencia permiten comparar la carga de enfermedad entre poblaciones de distinto tamaño.",
            "Ejemplo: en una región de 1 028 736 habitantes se registran 2 450 casos de tuberculosis. ¿Qué proporción está enferma?",
        ],
        theory: vec![
            TheoryBlock {
                title: "Prevalencia",
                body: "Proporción de la población que tiene la enfermedad en un momento dado (casos nuevos y antiguos).",
                formula: Some("P = casos existentes / población × 100"),
            },
            TheoryBlock {
                title: "Incidencia acumulada",
                body: "Proporción de personas en riesgo que desarrollan la enfermedad durante un periodo.",
                formula: Some("IA = casos nuevos / población en riesgo × 100"),
            },
            TheoryBlock {
                title: "Letalidad",
                body: "Proporción de enfermos que mueren por la enfermedad. Mide gravedad, no riesgo poblacional.",
                formula: Some("L = defunciones / casos totales × 100"),
            },
        ],
        practice: vec![
            PracticeExercise::new(
                "Prevalencia (%) con 2 450 casos en 1 028 736 habitantes",
                ExerciseKind::Prevalence {
                    cases: 2_450.0,
                    population: 1_028_736.0,
                },
                0.001,
                "Divida casos entre población y multiplique por 100.",
            ),
            PracticeExercise::new(
                "Incidencia (%) con 120 casos nuevos en 8 000 personas en riesgo",
                ExerciseKind::Incidence {
                    new_cases: 120.0,
                    at_risk: 8_000.0,
                },
                0.01,
                "Solo cuentan los casos nuevos del periodo.",
            ),
            PracticeExercise::new(
                "Letalidad (%) con 18 defunciones entre 240 casos",
                ExerciseKind::Lethality {
                    deaths: 18.0,
                    cases: 240.0,
                },
                0.01,
                "El denominador son los enfermos, no la población.",
            ),
        ],
        quiz: vec![
            QuizQuestion::new(
                "¿Qué medida incluye casos nuevos y antiguos?",
                &["Incidencia", "Prevalencia", "Letalidad"],
                1,
                "La prevalencia cuenta todos los casos existentes en el momento.",
            ),
            QuizQuestion::new(
                "La letalidad usa como denominador:",
                &["La población total", "La población en riesgo", "Los casos de la enfermedad"],
                2,
                "Mide la proporción de enfermos que fallecen.",
            ),
            QuizQuestion::new(
                "Una enfermedad crónica de larga duración suele tener:",
                &[
                    "Prevalencia alta respecto a su incidencia",
                    "Incidencia alta y prevalencia nula",
                    "Letalidad del 100 %",
                ],
                0,
                "Los casos se acumulan en el tiempo: P ≈ I × duración.",
            ),
        ],
        resources: shared_resources(),
    }
}

fn epidemic_curve() -> Lesson {
    Lesson {
        topic: Topic::EpidemicCurve,
        objective: "Construir e interpretar una curva epidémica y su curva acumulada.",
        intro: vec![
            "La curva epidémica grafica los casos nuevos por unidad de tiempo; su forma sugiere el tipo de brote.",
            "Una fuente común puntual produce una curva con un único pico; la transmisión persona a persona genera ondas sucesivas.",
        ],
        theory: vec![
            TheoryBlock {
                title: "Casos diarios",
                body: "Barras con los casos según fecha de inicio de síntomas.",
                formula: None,
            },
            TheoryBlock {
                title: "Casos acumulados",
                body: "Suma progresiva de los casos; su pendiente es máxima en el pico de la epidemia.",
                formula: Some("Cₜ = Σ casosᵢ  (i ≤ t)"),
            },
            TheoryBlock {
                title: "Tasa de ataque",
                body: "Incidencia acumulada durante todo el brote.",
                formula: Some("TA = casos del brote / población expuesta × 100"),
            },
        ],
        practice: vec![PracticeExercise::new(
            "¿En qué día ocurre el pico del brote del simulador?",
            ExerciseKind::PeakDay(outbreak_daily_cases()),
            0.0,
            "Busque el día con más casos nuevos.",
        )],
        quiz: vec![
            QuizQuestion::new(
                "Una curva con un solo pico estrecho sugiere:",
                &["Fuente común puntual", "Transmisión propagada", "Endemia estable"],
                0,
                "Todos los casos se expusieron en un mismo momento.",
            ),
            QuizQuestion::new(
                "La curva acumulada nunca puede:",
                &["Aumentar", "Disminuir", "Mantenerse constante"],
                1,
                "Se suman casos no negativos, por eso no decrece.",
            ),
        ],
        resources: shared_resources(),
    }
}

fn dashboard() -> Lesson {
    Lesson {
        topic: Topic::Dashboard,
        objective: "Leer un tablero de vigilancia y comparar regiones con indicadores estandarizados.",
        intro: vec![
            "Un tablero reúne indicadores clave para apoyar decisiones. Comparar conteos crudos entre regiones de distinto tamaño es engañoso; por eso se usan tasas.",
        ],
        theory: vec![
            TheoryBlock {
                title: "Tasas por 100 000 habitantes",
                body: "Multiplicar la proporción por 100 000 facilita la lectura cuando los eventos son poco frecuentes.",
                formula: Some("tasa = casos / población × 100 000"),
            },
            TheoryBlock {
                title: "Indicadores del tablero",
                body: "Prevalencia, incidencia y letalidad por región, con los totales del territorio.",
                formula: None,
            },
        ],
        practice: vec![PracticeExercise::new(
            "Letalidad (%) de la región Sur: 61 defunciones entre 1 870 casos",
            ExerciseKind::Lethality {
                deaths: 61.0,
                cases: 1_870.0,
            },
            0.01,
            "Divida defunciones entre casos.",
        )],
        quiz: vec![
            QuizQuestion::new(
                "¿Por qué no comparar solo el número de casos entre regiones?",
                &[
                    "Porque las poblaciones tienen tamaños distintos",
                    "Porque los casos no son datos",
                    "Porque siempre son iguales",
                ],
                0,
                "Las tasas ajustan por el tamaño de la población.",
            ),
            QuizQuestion::new(
                "Una región con alta letalidad y baja prevalencia indica:",
                &[
                    "Pocos casos, pero graves o mal atendidos",
                    "Muchos casos leves",
                    "Error de cálculo seguro",
                ],
                0,
                "La letalidad refleja gravedad entre los enfermos.",
            ),
        ],
        resources: shared_resources(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::quiz::validate;

    #[test]
    fn test_every_lesson_is_complete() {
        for topic in Topic::ALL {
            let lesson = lesson(topic);
            assert_eq!(lesson.topic, topic);
            assert!(!lesson.intro.is_empty(), "{topic} has no intro");
            assert!(!lesson.theory.is_empty(), "{topic} has no theory");
            assert!(!lesson.practice.is_empty(), "{topic} has no practice");
            assert!(!lesson.resources.is_empty(), "{topic} has no resources");
            validate(&lesson.quiz).unwrap();
        }
    }

    #[test]
    fn test_every_exercise_has_an_answer() {
        for topic in Topic::ALL {
            for ex in lesson(topic).practice {
                assert!(ex.kind.expected().is_ok(), "{}", ex.prompt);
            }
        }
    }

    #[test]
    fn test_datasets_are_consistent() {
        let paired = age_vs_pressure();
        assert_eq!(paired.xs.len(), paired.ys.len());
        let total: f64 = outbreak_daily_cases().iter().sum();
        assert!(total <= OUTBREAK_POPULATION);
        for r in regions() {
            assert!(r.cases <= r.population && r.deaths <= r.cases);
        }
    }
}
